//! Ratatui front end: the terminal [`Panel`](crate::panel::Panel)
//! implementation, its frame layout, and the pad palette.

mod panel;
mod theme;
mod view;

pub use panel::TuiPanel;
