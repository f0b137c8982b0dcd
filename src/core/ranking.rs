//! Bounded top-score ranking.
//!
//! Pure data, shared by the local score file and the ranking service so both
//! ends order entries identically.

use serde::{Deserialize, Serialize};

/// Most entries a board keeps after an insert.
pub const LEADERBOARD_CAP: usize = 10;

/// One recorded result. The field names are the wire and disk format of the
/// ranking service, so they stay short and lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub date: String,
}

/// A descending top-ten list. Serializes as a bare JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank a new entry and cut the board back to [`LEADERBOARD_CAP`].
    ///
    /// The entry lands before the first strictly lower score, so an equal
    /// score queues behind the ones already there and existing entries never
    /// reorder. An entry pushed past the cap simply disappears; a full board
    /// of higher scores is the bounded-board contract, not an error.
    #[must_use]
    pub fn insert(mut self, entry: ScoreEntry) -> Self {
        let at = self
            .entries
            .iter()
            .position(|ranked| ranked.score < entry.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, entry);
        self.entries.truncate(LEADERBOARD_CAP);
        self
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            score,
            date: "1/2/2034".to_string(),
        }
    }

    fn board_of(scores: &[u32]) -> Leaderboard {
        scores
            .iter()
            .fold(Leaderboard::new(), |board, score| {
                board.insert(entry("seed", *score))
            })
    }

    fn scores(board: &Leaderboard) -> Vec<u32> {
        board.entries().iter().map(|e| e.score).collect()
    }

    #[test]
    fn first_entry_lands_alone() {
        let board = Leaderboard::new().insert(entry("ada", 3));
        assert_eq!(scores(&board), vec![3]);
    }

    #[test]
    fn new_score_lands_before_first_lower_one() {
        let board = board_of(&[50, 30, 10]).insert(entry("ada", 40));
        assert_eq!(scores(&board), vec![50, 40, 30, 10]);
        assert_eq!(board.entries()[1].name, "ada");
    }

    #[test]
    fn equal_scores_keep_arrival_order() {
        let board = Leaderboard::new()
            .insert(entry("first", 20))
            .insert(entry("second", 20))
            .insert(entry("third", 20));
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn lowest_entry_drops_off_a_full_board() {
        let full = board_of(&[100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
        let board = full.insert(entry("ada", 55));
        assert_eq!(board.len(), LEADERBOARD_CAP);
        assert_eq!(
            scores(&board),
            vec![100, 90, 80, 70, 60, 55, 50, 40, 30, 20]
        );
    }

    #[test]
    fn too_low_for_a_full_board_disappears() {
        let full = board_of(&[100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
        let board = full.clone().insert(entry("ada", 5));
        assert_eq!(scores(&board), scores(&full));
        assert!(!board.entries().iter().any(|e| e.name == "ada"));
    }

    #[test]
    fn tying_tenth_place_queues_off_a_full_board() {
        // An equal score queues behind the existing one, which on a full
        // board is position ten, so truncation drops it straight away.
        let full = board_of(&[100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
        let board = full.clone().insert(entry("ada", 10));
        assert_eq!(board, full);
        assert!(!board.entries().iter().any(|e| e.name == "ada"));
    }

    #[test]
    fn descending_order_is_preserved() {
        let board = board_of(&[3, 14, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9]);
        let ranked = scores(&board);
        assert_eq!(ranked.len(), LEADERBOARD_CAP);
        assert!(ranked.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn serializes_as_a_bare_array() {
        let board = Leaderboard::new().insert(entry("ada", 3));
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[{"name":"ada","score":3,"date":"1/2/2034"}]"#);
        let back: Leaderboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
