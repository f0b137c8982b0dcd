//! Environment-driven configuration.
//!
//! Everything tweakable comes from `MEMOTERM_*` variables with workable
//! defaults, so plain `memoterm` always starts. The player name can also be
//! passed as the first CLI argument, which wins over the environment.

use std::env;
use std::path::PathBuf;

/// Shown when no player name was given anywhere.
pub const DEFAULT_PLAYER: &str = "Mystery player";

/// Default address of the ranking service, shared by game and daemon.
pub const DEFAULT_RANKING_ADDR: &str = "127.0.0.1:4100";

/// `MEMOTERM_RANKING` value that disables score submission entirely.
const RANKING_OFF: &str = "off";

/// Game-side settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name recorded with every score.
    pub player: String,
    /// Local leaderboard file (`MEMOTERM_SCORES`).
    pub scores_path: PathBuf,
    /// Ranking service address (`MEMOTERM_RANKING`), `None` when turned off.
    pub ranking_addr: Option<String>,
    /// Log file (`MEMOTERM_LOG`); logging stays off without it, since the
    /// alternate screen and stderr do not mix.
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let player = env::args()
            .nth(1)
            .filter(|name| !name.trim().is_empty())
            .or_else(|| env::var("MEMOTERM_PLAYER").ok())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER.to_string());

        let scores_path = env::var("MEMOTERM_SCORES")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("scores.json"));

        let ranking_addr = match env::var("MEMOTERM_RANKING") {
            Ok(value) if value.eq_ignore_ascii_case(RANKING_OFF) => None,
            Ok(value) => Some(value),
            Err(_) => Some(DEFAULT_RANKING_ADDR.to_string()),
        };

        let log_path = env::var("MEMOTERM_LOG").ok().map(PathBuf::from);

        Self {
            player,
            scores_path,
            ranking_addr,
            log_path,
        }
    }
}

/// Daemon-side settings.
#[derive(Debug, Clone)]
pub struct RankdConfig {
    /// Listen address (`MEMOTERM_RANKD_ADDR`).
    pub addr: String,
    /// Board file (`MEMOTERM_RANKD_SCORES`), kept separate from the game's
    /// local board so a daemon on the same machine does not fight it.
    pub scores_path: PathBuf,
}

impl RankdConfig {
    pub fn from_env() -> Self {
        Self {
            addr: env::var("MEMOTERM_RANKD_ADDR")
                .unwrap_or_else(|_| DEFAULT_RANKING_ADDR.to_string()),
            scores_path: env::var("MEMOTERM_RANKD_SCORES")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("ranking_scores.json")),
        }
    }
}
