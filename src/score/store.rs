//! Local leaderboard file.
//!
//! One JSON array on disk. A missing or damaged file reads as an empty
//! board, so a first run or a corrupted save never blocks the game.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::warn;

use crate::core::Leaderboard;

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved board. Anything unreadable counts as no scores yet.
    pub async fn load(&self) -> Leaderboard {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) => {
                if error.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %error, "score file unreadable, starting fresh");
                }
                return Leaderboard::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(board) => board,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "score file unreadable, starting fresh");
                Leaderboard::new()
            }
        }
    }

    pub async fn save(&self, board: &Leaderboard) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let raw = serde_json::to_string_pretty(board)?;
        fs::write(&self.path, raw)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
