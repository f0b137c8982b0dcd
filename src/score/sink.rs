//! Score recording.
//!
//! Remote first when a ranking service is configured, local always as the
//! safety net. Recording never fails the game; the worst case is a board
//! that only this machine has seen.

use chrono::Local;
use tracing::{info, warn};

use crate::core::{Leaderboard, ScoreEntry};
use crate::score::remote::RankingClient;
use crate::score::store::ScoreStore;

pub struct ScoreSink {
    player: String,
    store: ScoreStore,
    client: Option<RankingClient>,
}

impl ScoreSink {
    pub fn new(player: impl Into<String>, store: ScoreStore, client: Option<RankingClient>) -> Self {
        Self {
            player: player.into(),
            store,
            client,
        }
    }

    /// Record a finished session and return the board to put on screen.
    ///
    /// When the ranking service answers, its board replaces the local file
    /// wholesale, so this machine converges on the shared view. When it does
    /// not, the entry ranks into the local board instead.
    pub async fn record(&self, score: u32) -> Leaderboard {
        let entry = ScoreEntry {
            name: self.player.clone(),
            score,
            date: Local::now().format("%-m/%-d/%Y").to_string(),
        };

        if let Some(client) = &self.client {
            match client.submit(&entry).await {
                Ok(board) => {
                    info!(score, "score accepted by the ranking service");
                    if let Err(error) = self.store.save(&board).await {
                        warn!(%error, "could not mirror the service board locally");
                    }
                    return board;
                }
                Err(error) => {
                    warn!(%error, "ranking service unavailable, keeping the score locally");
                }
            }
        }

        let board = self.store.load().await.insert(entry);
        if let Err(error) = self.store.save(&board).await {
            warn!(%error, "could not save the local board");
        }
        board
    }
}
