//! Session runner.
//!
//! Drives whole games against any [`Panel`]: grow the sequence, replay it
//! one awaited press at a time, feed the player's pads to the engine, and
//! route the outcome. On a failed session the score goes to the sink before
//! the game-over screen plays out.

use anyhow::Result;
use rand_core::RngCore;
use tracing::{debug, info};

use crate::core::{Outcome, SequenceEngine};
use crate::panel::{pace, Panel, PlayerAction, GAME_OVER_LAPS, RESET_LAPS};
use crate::score::ScoreSink;

/// What to do after a session ends.
enum Flow {
    NewSession,
    Quit,
}

/// How an input phase resolved.
enum RoundEnd {
    Completed(u32),
    Failed(u32),
    Restart,
    Quit,
}

pub struct GameRunner<P: Panel, R: RngCore> {
    engine: SequenceEngine<R>,
    panel: P,
    sink: ScoreSink,
}

impl<P: Panel + Send, R: RngCore> GameRunner<P, R> {
    pub fn new(engine: SequenceEngine<R>, panel: P, sink: ScoreSink) -> Self {
        Self { engine, panel, sink }
    }

    /// Run sessions back to back until the player quits.
    pub async fn run(mut self) -> Result<()> {
        loop {
            match self.session().await? {
                Flow::NewSession => continue,
                Flow::Quit => break,
            }
        }
        info!("player left");
        Ok(())
    }

    /// One session: attract, then rounds until a mismatch ends it.
    async fn session(&mut self) -> Result<Flow> {
        self.engine.reset();
        self.panel.set_score(None);
        self.panel.set_message("Watch the pads");
        self.panel.attract(RESET_LAPS).await?;
        if self.panel.interrupted() {
            return Ok(Flow::Quit);
        }
        info!("session started");

        loop {
            let length = self.engine.start_round();
            debug!(round = length, "replaying sequence");
            self.panel.set_message("Watch the pads");
            self.panel.pause(pace::LEAD_IN).await?;
            while let Some(signal) = self.engine.replay_next() {
                self.panel.press(signal, pace::REPLAY).await?;
            }
            if self.panel.interrupted() {
                return Ok(Flow::Quit);
            }
            self.engine.begin_input_phase();
            self.panel.set_message("Your turn: echo the sequence");

            match self.input_phase().await? {
                RoundEnd::Completed(score) => {
                    self.panel.set_score(Some(score));
                    debug!(score, "round complete");
                    if self.panel.interrupted() {
                        return Ok(Flow::Quit);
                    }
                }
                RoundEnd::Failed(score) => return self.game_over(score).await,
                RoundEnd::Restart => return Ok(Flow::NewSession),
                RoundEnd::Quit => return Ok(Flow::Quit),
            }
        }
    }

    /// Accept pads until the round resolves or the player bails out.
    async fn input_phase(&mut self) -> Result<RoundEnd> {
        loop {
            let signal = match self.panel.next_action().await? {
                PlayerAction::Quit => return Ok(RoundEnd::Quit),
                PlayerAction::Restart => return Ok(RoundEnd::Restart),
                PlayerAction::Pad(signal) => signal,
            };
            let Some(outcome) = self.engine.submit(signal) else {
                // Window closed; the pad lands in the void, same as mashing
                // buttons between acknowledgments.
                continue;
            };
            self.panel.press(signal, pace::ACK).await?;
            match outcome {
                Outcome::Continue => self.engine.begin_input_phase(),
                Outcome::RoundComplete { score } => return Ok(RoundEnd::Completed(score)),
                Outcome::Failed { score } => return Ok(RoundEnd::Failed(score)),
            }
        }
    }

    /// Record the score, show the board, run the long attract, then wait
    /// for a restart or quit.
    async fn game_over(&mut self, score: u32) -> Result<Flow> {
        info!(score, "session failed");
        let board = self.sink.record(score).await;
        self.panel.set_score(Some(score));
        self.panel
            .set_message("Wrong pad! n starts a new game, q quits");
        self.panel.show_scores(&board);
        self.panel.attract(GAME_OVER_LAPS).await?;
        if self.panel.interrupted() {
            return Ok(Flow::Quit);
        }
        loop {
            match self.panel.next_action().await? {
                PlayerAction::Restart => return Ok(Flow::NewSession),
                PlayerAction::Quit => return Ok(Flow::Quit),
                // Pads are dead on the game-over screen.
                PlayerAction::Pad(_) => {}
            }
        }
    }
}
