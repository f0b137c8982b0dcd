//! Ranking service client.
//!
//! One JSON line out, one JSON line back. Any hiccup, whether a refused
//! connection, a stall, or a reply that is not a score list, surfaces as an
//! error so the caller can fall back to the local board.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::core::{Leaderboard, ScoreEntry};

/// Cap on the whole submit exchange, connect included.
const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct RankingClient {
    addr: String,
}

impl RankingClient {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Submit one entry and return the service's updated top list.
    pub async fn submit(&self, entry: &ScoreEntry) -> Result<Leaderboard> {
        timeout(EXCHANGE_TIMEOUT, self.exchange(entry))
            .await
            .map_err(|_| anyhow!("ranking service timed out after {EXCHANGE_TIMEOUT:?}"))?
    }

    async fn exchange(&self, entry: &ScoreEntry) -> Result<Leaderboard> {
        let stream = TcpStream::connect(&self.addr)
            .await
            .with_context(|| format!("connecting to ranking service at {}", self.addr))?;
        let (read_half, mut write_half) = stream.into_split();

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        write_half.write_all(line.as_bytes()).await?;
        write_half.flush().await?;

        let mut reply = String::new();
        let read = BufReader::new(read_half).read_line(&mut reply).await?;
        if read == 0 {
            return Err(anyhow!("ranking service closed the connection without replying"));
        }
        debug!(bytes = read, "ranking reply received");
        serde_json::from_str(reply.trim())
            .map_err(|error| anyhow!("ranking reply was not a score list: {error}"))
    }
}
