//! Terminal panel.
//!
//! Implements [`Panel`] on top of ratatui and the crossterm event stream.
//! Presentation timing runs on the tokio clock; keys that arrive while a
//! press or pause is playing get drained so stale pad hits never leak into
//! the next input phase, with quit keys remembered instead of dropped.

use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::core::{Leaderboard, Signal};
use crate::panel::{Panel, PlayerAction};
use crate::ui::view::{self, ViewModel};

pub struct TuiPanel {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    view: ViewModel,
    interrupted: bool,
}

impl TuiPanel {
    pub fn new(terminal: Terminal<CrosstermBackend<Stdout>>, player: String) -> Self {
        Self {
            terminal,
            events: EventStream::new(),
            view: ViewModel {
                player,
                ..ViewModel::default()
            },
            interrupted: false,
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.terminal.draw(|frame| view::draw(frame, &self.view))?;
        Ok(())
    }

    /// Sleep until `duration` elapses, draining events the whole time.
    async fn sleep_draining(&mut self, duration: Duration) -> Result<()> {
        let deadline = Instant::now() + duration;
        loop {
            tokio::select! {
                _ = sleep_until(deadline) => return Ok(()),
                maybe = self.events.next() => {
                    match maybe {
                        Some(event) => self.absorb(event?)?,
                        // Input stream gone; sleep out the rest plain.
                        None => {
                            sleep_until(deadline).await;
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    /// Handle an event that arrived mid-presentation. Pad and restart keys
    /// are stale here and get dropped.
    fn absorb(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit_key(key) {
                    debug!("quit requested during playback");
                    self.interrupted = true;
                }
            }
            Event::Resize(_, _) => self.redraw()?,
            _ => {}
        }
        Ok(())
    }
}

#[async_trait]
impl Panel for TuiPanel {
    async fn press(&mut self, signal: Signal, pace: Duration) -> Result<()> {
        // A pending quit makes the rest of any playback pointless.
        if self.interrupted {
            return Ok(());
        }
        self.view.lit = Some(signal);
        self.redraw()?;
        self.sleep_draining(pace).await?;
        self.view.lit = None;
        self.redraw()?;
        self.sleep_draining(pace).await?;
        Ok(())
    }

    async fn pause(&mut self, pause: Duration) -> Result<()> {
        self.redraw()?;
        self.sleep_draining(pause).await
    }

    fn set_score(&mut self, score: Option<u32>) {
        self.view.score = score;
    }

    fn set_message(&mut self, message: &str) {
        self.view.message = message.to_string();
    }

    fn show_scores(&mut self, board: &Leaderboard) {
        self.view.scores = Some(board.clone());
    }

    async fn next_action(&mut self) -> Result<PlayerAction> {
        if self.interrupted {
            return Ok(PlayerAction::Quit);
        }
        // Show whatever changed since the last press before blocking on keys.
        self.redraw()?;
        loop {
            let Some(event) = self.events.next().await else {
                return Ok(PlayerAction::Quit);
            };
            match event? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = map_key(key) {
                        debug!(?action, "player action");
                        if action == PlayerAction::Restart {
                            self.view.scores = None;
                        }
                        return Ok(action);
                    }
                }
                Event::Resize(_, _) => self.redraw()?,
                _ => {}
            }
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupted
    }
}

fn map_key(key: KeyEvent) -> Option<PlayerAction> {
    if is_quit_key(key) {
        return Some(PlayerAction::Quit);
    }
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('g') => Some(PlayerAction::Pad(Signal::Green)),
        KeyCode::Char('2') | KeyCode::Char('r') => Some(PlayerAction::Pad(Signal::Red)),
        KeyCode::Char('3') | KeyCode::Char('y') => Some(PlayerAction::Pad(Signal::Yellow)),
        KeyCode::Char('4') | KeyCode::Char('b') => Some(PlayerAction::Pad(Signal::Blue)),
        KeyCode::Char('n') => Some(PlayerAction::Restart),
        _ => None,
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_and_letters_both_select_pads() {
        assert_eq!(
            map_key(key(KeyCode::Char('1'))),
            Some(PlayerAction::Pad(Signal::Green))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('y'))),
            Some(PlayerAction::Pad(Signal::Yellow))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('b'))),
            Some(PlayerAction::Pad(Signal::Blue))
        );
    }

    #[test]
    fn control_keys_map_to_flow_actions() {
        assert_eq!(map_key(key(KeyCode::Char('n'))), Some(PlayerAction::Restart));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(PlayerAction::Quit));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(PlayerAction::Quit));
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_counts_as_quit() {
        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert!(is_quit_key(ctrl_c));
        assert!(!is_quit_key(key(KeyCode::Char('c'))));
    }
}
