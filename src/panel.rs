//! The presentation seam.
//!
//! The engine decides, a [`Panel`] shows. The session runner drives any
//! panel implementation: the ratatui one for play, scripted ones in tests.
//! Presentation methods resolve only when their visual phase is over, so the
//! runner can sequence a replay by awaiting one press after another.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::{Leaderboard, Signal};

/// Press durations for each phase of the game.
pub mod pace {
    use std::time::Duration;

    /// Replaying the sequence the player has to echo.
    pub const REPLAY: Duration = Duration::from_millis(500);
    /// Acknowledging a pad the player pressed.
    pub const ACK: Duration = Duration::from_millis(250);
    /// Idle attract animation.
    pub const ATTRACT: Duration = Duration::from_millis(100);
    /// Dead air before a replay begins.
    pub const LEAD_IN: Duration = Duration::from_millis(500);
}

/// Attract laps when a fresh session begins.
pub const RESET_LAPS: u8 = 1;
/// Attract laps on the game-over screen.
pub const GAME_OVER_LAPS: u8 = 5;

/// What the player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// A pad was selected.
    Pad(Signal),
    /// Start a fresh session.
    Restart,
    /// Leave the game.
    Quit,
}

/// Everything the player sees or does, behind one interface.
#[async_trait]
pub trait Panel {
    /// Light `signal` for `pace`, revert it, then hold the reverted board
    /// for `pace` again.
    async fn press(&mut self, signal: Signal, pace: Duration) -> Result<()>;

    /// Let `pause` elapse with nothing lit.
    async fn pause(&mut self, pause: Duration) -> Result<()>;

    /// Idle animation: every pad in board order, `laps` times over.
    async fn attract(&mut self, laps: u8) -> Result<()> {
        for _ in 0..laps {
            for signal in Signal::ALL {
                self.press(signal, pace::ATTRACT).await?;
            }
        }
        Ok(())
    }

    /// Update the score readout; `None` shows the idle placeholder.
    fn set_score(&mut self, score: Option<u32>);

    /// Update the status line.
    fn set_message(&mut self, message: &str);

    /// Put the leaderboard up for the game-over screen.
    fn show_scores(&mut self, board: &Leaderboard);

    /// Wait for the player's next action. Called only when the runner is
    /// ready to accept one; pads hit during a presentation never get here.
    async fn next_action(&mut self) -> Result<PlayerAction>;

    /// Whether the player asked to leave while a presentation was playing.
    fn interrupted(&self) -> bool {
        false
    }
}
