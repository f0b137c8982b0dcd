//! Recording finished sessions: the local JSON board, the ranking service
//! and its client, and the sink that ties them together with a fallback.

pub mod remote;
pub mod service;
pub mod sink;
pub mod store;

pub use remote::RankingClient;
pub use sink::ScoreSink;
pub use store::ScoreStore;
