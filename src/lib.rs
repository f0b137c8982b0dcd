//! A Simon-style sequence memory game for the terminal.
//!
//! [`core`] holds the only real game logic: the round engine that grows and
//! judges the signal sequence, and the bounded score ranking. Everything the
//! player sees sits behind the [`panel::Panel`] trait, implemented by the
//! ratatui front end in [`ui`] and by scripted panels in tests. [`runner`]
//! drives whole sessions, and [`score`] records results, preferring the
//! shared ranking service and falling back to a local JSON board.

pub mod config;
pub mod core;
pub mod panel;
pub mod runner;
pub mod score;
pub mod ui;

// Re-export for convenience
pub use crate::core::{Outcome, SequenceEngine, Signal};
pub use crate::panel::{Panel, PlayerAction};
