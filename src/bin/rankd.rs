//! Standalone ranking service.
//!
//! Keeps the shared top-ten board for every memoterm on the network. The
//! game falls back to its local board whenever this daemon is unreachable,
//! so running it is optional.

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use memoterm::config::RankdConfig;
use memoterm::score::{service, ScoreStore};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let config = RankdConfig::from_env();
    let listener = TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, board = %config.scores_path.display(), "accepting score submissions");
    service::serve(listener, ScoreStore::new(config.scores_path)).await
}
