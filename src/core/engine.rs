//! Round engine for the sequence memory game.
//!
//! Owns the only mutable game state: the growing signal sequence, the replay
//! cursor used while the sequence is presented, and the match cursor the
//! player has to advance. Anything the player sees or touches lives behind
//! the [`Panel`](crate::panel::Panel) trait; the engine never draws, sleeps
//! or reads keys.

use rand::Rng;
use rand_core::RngCore;

/// One of the four colored pads.
///
/// Signals are compared for equality only; no pad outranks another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Signal {
    /// The full pad alphabet, in board order (top row, then bottom row).
    pub const ALL: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Yellow, Signal::Blue];
}

/// Result of judging one player submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Correct pad, with more positions left in the current round.
    Continue,
    /// Correct pad on the last position. `score` counts the rounds fully
    /// completed, including this one.
    RoundComplete { score: u32 },
    /// Wrong pad. `score` is the count of rounds completed before the miss.
    Failed { score: u32 },
}

/// Where a session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No sequence yet.
    Idle,
    /// The sequence is being replayed to the player.
    Presenting,
    /// The player is reproducing the sequence.
    AwaitingInput,
    /// A mismatch happened; only [`SequenceEngine::reset`] leaves this phase.
    Failed,
}

/// The round state machine.
///
/// Generic over the RNG so real sessions draw from the system generator
/// while tests run on a seeded one.
#[derive(Debug)]
pub struct SequenceEngine<R: RngCore> {
    sequence: Vec<Signal>,
    replay_cursor: usize,
    match_cursor: usize,
    accepting: bool,
    phase: Phase,
    rng: R,
}

impl<R: RngCore> SequenceEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            sequence: Vec::new(),
            replay_cursor: 0,
            match_cursor: 0,
            accepting: false,
            phase: Phase::Idle,
            rng,
        }
    }

    /// Drop the whole session back to the pre-game state. Valid in every
    /// phase, and the only way out of [`Phase::Failed`].
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.replay_cursor = 0;
        self.match_cursor = 0;
        self.accepting = false;
        self.phase = Phase::Idle;
    }

    /// Append one uniformly random signal and arm the replay. Returns the
    /// new sequence length. Repeats are normal; every pad stays equally
    /// likely no matter what came before. A failed session stays failed, so
    /// calling this in [`Phase::Failed`] changes nothing.
    pub fn start_round(&mut self) -> usize {
        if self.phase == Phase::Failed {
            return self.sequence.len();
        }
        let pick = Signal::ALL[self.rng.random_range(0..Signal::ALL.len())];
        self.sequence.push(pick);
        self.replay_cursor = 0;
        self.match_cursor = 0;
        self.accepting = false;
        self.phase = Phase::Presenting;
        self.sequence.len()
    }

    /// Hand out the next signal to present, advancing the replay cursor.
    /// `None` once the whole sequence has been handed out, and always
    /// outside [`Phase::Presenting`].
    pub fn replay_next(&mut self) -> Option<Signal> {
        if self.phase != Phase::Presenting {
            return None;
        }
        let signal = self.sequence.get(self.replay_cursor).copied()?;
        self.replay_cursor += 1;
        Some(signal)
    }

    /// Open the input window for exactly one submission. Called once the
    /// replay finishes, and again after each acknowledged correct pad. Does
    /// nothing in [`Phase::Idle`] or [`Phase::Failed`].
    pub fn begin_input_phase(&mut self) {
        match self.phase {
            Phase::Presenting | Phase::AwaitingInput => {
                self.phase = Phase::AwaitingInput;
                self.accepting = true;
            }
            Phase::Idle | Phase::Failed => {}
        }
    }

    /// Judge one player selection.
    ///
    /// Returns `None`, mutating nothing, while the input window is closed:
    /// during playback, between acknowledgments, after a failure. Otherwise
    /// the window closes until [`Self::begin_input_phase`] reopens it, so
    /// every submission gets acknowledged before the next one counts.
    pub fn submit(&mut self, signal: Signal) -> Option<Outcome> {
        if !self.accepting {
            return None;
        }
        self.accepting = false;
        // The window only opens with a non-empty sequence and an in-range
        // cursor, so the index holds.
        if self.sequence[self.match_cursor] != signal {
            self.phase = Phase::Failed;
            return Some(Outcome::Failed {
                score: self.current_score(),
            });
        }
        self.match_cursor += 1;
        if self.match_cursor == self.sequence.len() {
            self.match_cursor = 0;
            self.phase = Phase::Presenting;
            Some(Outcome::RoundComplete {
                score: self.sequence.len() as u32,
            })
        } else {
            Some(Outcome::Continue)
        }
    }

    /// Rounds fully completed so far. The round in progress does not count
    /// until it is matched, and an empty session scores zero.
    pub fn current_score(&self) -> u32 {
        self.sequence.len().saturating_sub(1) as u32
    }

    pub fn sequence(&self) -> &[Signal] {
        &self.sequence
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> SequenceEngine<StdRng> {
        SequenceEngine::new(StdRng::seed_from_u64(7))
    }

    /// Echo the engine's own sequence back at it, one acknowledged pad at a
    /// time, and return the final outcome of the round.
    fn play_round_perfectly(engine: &mut SequenceEngine<StdRng>) -> Outcome {
        let mut last = None;
        for position in 0..engine.sequence().len() {
            engine.begin_input_phase();
            let signal = engine.sequence()[position];
            last = engine.submit(signal);
        }
        last.expect("round had at least one position")
    }

    fn wrong_pad(correct: Signal) -> Signal {
        Signal::ALL
            .into_iter()
            .find(|signal| *signal != correct)
            .expect("four pads to pick from")
    }

    #[test]
    fn starts_idle_and_empty() {
        let engine = engine();
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.sequence().is_empty());
        assert_eq!(engine.current_score(), 0);
    }

    #[test]
    fn start_round_appends_exactly_one_signal() {
        let mut engine = engine();
        for round in 1..=8 {
            assert_eq!(engine.start_round(), round);
            assert_eq!(engine.sequence().len(), round);
            assert_eq!(engine.phase(), Phase::Presenting);
            assert_eq!(
                play_round_perfectly(&mut engine),
                Outcome::RoundComplete {
                    score: round as u32
                }
            );
        }
    }

    #[test]
    fn earlier_signals_survive_new_rounds() {
        let mut engine = engine();
        engine.start_round();
        play_round_perfectly(&mut engine);
        let first = engine.sequence().to_vec();
        engine.start_round();
        assert_eq!(&engine.sequence()[..first.len()], &first[..]);
    }

    #[test]
    fn replay_walks_the_whole_sequence_once() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.start_round();
            let expected = engine.sequence().to_vec();
            let mut replayed = Vec::new();
            while let Some(signal) = engine.replay_next() {
                replayed.push(signal);
            }
            assert_eq!(replayed, expected);
            assert_eq!(engine.replay_next(), None);
            play_round_perfectly(&mut engine);
        }
    }

    #[test]
    fn submissions_are_ignored_while_replaying() {
        let mut engine = engine();
        engine.start_round();
        assert_eq!(engine.submit(Signal::Green), None);
        assert_eq!(engine.match_cursor, 0);
        // The replay is still intact afterwards.
        assert_eq!(engine.replay_next(), Some(engine.sequence()[0]));
    }

    #[test]
    fn each_submission_needs_a_fresh_input_window() {
        let mut engine = engine();
        engine.start_round();
        play_round_perfectly(&mut engine);
        engine.start_round();
        engine.begin_input_phase();
        let first = engine.sequence()[0];
        assert!(engine.submit(first).is_some());
        // Window stays closed until begin_input_phase runs again.
        assert_eq!(engine.submit(engine.sequence()[1]), None);
        assert_eq!(engine.match_cursor, 1);
    }

    #[test]
    fn correct_round_walks_continue_then_complete() {
        let mut engine = engine();
        engine.start_round();
        play_round_perfectly(&mut engine);
        engine.start_round();
        engine.begin_input_phase();
        assert_eq!(engine.submit(engine.sequence()[0]), Some(Outcome::Continue));
        engine.begin_input_phase();
        assert_eq!(
            engine.submit(engine.sequence()[1]),
            Some(Outcome::RoundComplete { score: 2 })
        );
        assert_eq!(engine.match_cursor, 0);
        assert_eq!(engine.phase(), Phase::Presenting);
    }

    #[test]
    fn mismatch_fails_with_completed_round_count() {
        let mut engine = engine();
        for _ in 0..4 {
            engine.start_round();
            play_round_perfectly(&mut engine);
        }
        engine.start_round();
        engine.begin_input_phase();
        let outcome = engine.submit(wrong_pad(engine.sequence()[0]));
        assert_eq!(outcome, Some(Outcome::Failed { score: 4 }));
        assert_eq!(engine.phase(), Phase::Failed);
    }

    #[test]
    fn failed_session_stays_failed_until_reset() {
        let mut engine = engine();
        engine.start_round();
        engine.begin_input_phase();
        engine.submit(wrong_pad(engine.sequence()[0]));
        assert_eq!(engine.phase(), Phase::Failed);

        let frozen = engine.sequence().to_vec();
        assert_eq!(engine.start_round(), frozen.len());
        engine.begin_input_phase();
        assert_eq!(engine.submit(Signal::Green), None);
        assert_eq!(engine.sequence(), &frozen[..]);

        engine.reset();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.start_round(), 1);
    }

    #[test]
    fn score_counts_completed_rounds_only() {
        let mut engine = engine();
        assert_eq!(engine.current_score(), 0);
        engine.start_round();
        assert_eq!(engine.current_score(), 0);
        play_round_perfectly(&mut engine);
        engine.start_round();
        assert_eq!(engine.current_score(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut engine = engine();
        engine.start_round();
        engine.begin_input_phase();
        engine.submit(engine.sequence()[0]);
        engine.reset();
        assert!(engine.sequence().is_empty());
        assert_eq!(engine.match_cursor, 0);
        assert_eq!(engine.replay_cursor, 0);
        assert!(!engine.accepting);
    }

    proptest! {
        /// Any interleaving of operations keeps both cursors in bounds and
        /// never lets a closed input window move the match cursor.
        #[test]
        fn cursors_stay_in_bounds(ops in prop::collection::vec(0u8..8, 0..256)) {
            let mut engine = engine();
            for op in ops {
                match op {
                    0 => engine.reset(),
                    1 => {
                        engine.start_round();
                    }
                    2 => {
                        engine.replay_next();
                    }
                    3 => engine.begin_input_phase(),
                    other => {
                        let pad = Signal::ALL[(other as usize - 4) % Signal::ALL.len()];
                        let cursor_before = engine.match_cursor;
                        if engine.submit(pad).is_none() {
                            prop_assert_eq!(engine.match_cursor, cursor_before);
                        }
                    }
                }
                prop_assert!(engine.match_cursor <= engine.sequence.len());
                prop_assert!(engine.replay_cursor <= engine.sequence.len());
            }
        }
    }
}
