//! Pure game logic: the round engine and the score ranking.

pub mod engine;
pub mod ranking;

pub use engine::{Outcome, Phase, SequenceEngine, Signal};
pub use ranking::{Leaderboard, ScoreEntry, LEADERBOARD_CAP};
