//! Pad palette.
//!
//! Rest colors follow the classic board; a lit pad drops every channel by
//! the same step, so each pad darkens without changing hue.

use ratatui::style::Color;

use crate::core::Signal;

/// Rest and lit fill for one pad.
#[derive(Debug, Clone, Copy)]
pub struct PadColors {
    pub rest: Color,
    pub lit: Color,
}

const LIT_DROP: u8 = 50;

fn rest_rgb(signal: Signal) -> (u8, u8, u8) {
    match signal {
        Signal::Green => (0, 128, 0),
        Signal::Red => (245, 0, 0),
        Signal::Yellow => (245, 245, 0),
        Signal::Blue => (0, 0, 245),
    }
}

pub fn pad_colors(signal: Signal) -> PadColors {
    let (r, g, b) = rest_rgb(signal);
    PadColors {
        rest: Color::Rgb(r, g, b),
        lit: Color::Rgb(
            r.saturating_sub(LIT_DROP),
            g.saturating_sub(LIT_DROP),
            b.saturating_sub(LIT_DROP),
        ),
    }
}
