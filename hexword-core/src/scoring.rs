//! Letter values and the game-wide score ledger

use crate::board::{Hex, HexBoard, Owner};
use crate::scanner::FoundWord;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Letter values, A through Z
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A-M
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N-Z
];

/// Value of a single letter; anything outside A-Z is worth 1
pub fn letter_value(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_VALUES[(upper as u8 - b'A') as usize]
    } else {
        1
    }
}

/// Sum of letter values
pub fn word_value(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}

/// Running totals for both sides
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub player: u32,
    pub ai: u32,
}

impl ScoreState {
    pub fn get(&self, owner: Owner) -> u32 {
        match owner {
            Owner::Player => self.player,
            Owner::Ai => self.ai,
        }
    }

    fn add(&mut self, owner: Owner, points: u32) {
        match owner {
            Owner::Player => self.player += points,
            Owner::Ai => self.ai += points,
        }
    }
}

/// Cells of a word scored on the latest update
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightPath {
    pub word: String,
    pub path: Vec<Hex>,
    pub owner: Owner,
    pub points: u32,
}

/// Tracks which words have been used and who has scored what.
///
/// A word string is consumed the first time it is seen, whoever spelled it.
/// Points go to the owner of the word's last tile, and only when that owner
/// is the side that just moved; otherwise the word is burned for nothing.
#[derive(Clone, Debug, Default)]
pub struct ScoreLedger {
    validated: FxHashSet<String>,
    scores: ScoreState,
    highlights: Vec<HighlightPath>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit newly seen words after `acting` has moved.
    ///
    /// Replaces the highlights from the previous call and returns the new ones.
    pub fn apply_new_words(
        &mut self,
        board: &HexBoard,
        candidates: impl IntoIterator<Item = FoundWord>,
        acting: Owner,
    ) -> &[HighlightPath] {
        self.highlights.clear();

        for FoundWord { word, path } in candidates {
            if self.validated.contains(&word) {
                continue;
            }
            self.validated.insert(word.clone());

            let owner = match path.last().and_then(|&hex| board.tile_at(hex)) {
                Some(tile) => tile.owner,
                None => continue,
            };

            if owner != acting {
                tracing::debug!("Word '{}' burned: last tile belongs to {:?}", word, owner);
                continue;
            }

            let points = word_value(&word);
            self.scores.add(owner, points);
            tracing::debug!("{:?} scores {} for '{}'", owner, points, word);
            self.highlights.push(HighlightPath {
                word,
                path,
                owner,
                points,
            });
        }

        &self.highlights
    }

    pub fn scores(&self) -> ScoreState {
        self.scores
    }

    pub fn highlights(&self) -> &[HighlightPath] {
        &self.highlights
    }

    pub fn is_validated(&self, word: &str) -> bool {
        self.validated.contains(&word.to_lowercase())
    }

    /// Validated words in alphabetical order
    pub fn validated_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.validated.iter().cloned().collect();
        words.sort();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::scanner::scan;

    fn board_with(word: &str, owners: &[Owner]) -> HexBoard {
        let mut board = HexBoard::default();
        for (i, (letter, &owner)) in word.chars().zip(owners).enumerate() {
            board.place(Hex::new(i as i8, 0), letter, owner);
        }
        board
    }

    #[test]
    fn test_letter_values() {
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('q'), 10);
        assert_eq!(letter_value('Z'), 10);
        assert_eq!(letter_value('-'), 1);
        assert_eq!(word_value("cat"), 5);
        assert_eq!(word_value("QUIZ"), 22);
    }

    #[test]
    fn test_word_credited_to_acting_owner() {
        let dict = Dictionary::from_words(["cat"]);
        let board = board_with("CAT", &[Owner::Player; 3]);
        let mut ledger = ScoreLedger::new();

        let highlights = ledger.apply_new_words(&board, scan(&board, &dict), Owner::Player);
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].points, 5);
        assert_eq!(ledger.scores(), ScoreState { player: 5, ai: 0 });
        assert!(ledger.is_validated("cat"));
    }

    #[test]
    fn test_rescan_does_not_rescore() {
        let dict = Dictionary::from_words(["cat"]);
        let board = board_with("CAT", &[Owner::Player; 3]);
        let mut ledger = ScoreLedger::new();

        ledger.apply_new_words(&board, scan(&board, &dict), Owner::Player);
        let highlights = ledger.apply_new_words(&board, scan(&board, &dict), Owner::Player);
        assert!(highlights.is_empty());
        assert_eq!(ledger.scores().player, 5);
    }

    #[test]
    fn test_last_tile_owner_decides() {
        let dict = Dictionary::from_words(["cat"]);
        let board = board_with("CAT", &[Owner::Player, Owner::Player, Owner::Ai]);
        let mut ledger = ScoreLedger::new();

        ledger.apply_new_words(&board, scan(&board, &dict), Owner::Ai);
        assert_eq!(ledger.scores(), ScoreState { player: 0, ai: 5 });
    }

    #[test]
    fn test_off_turn_word_is_burned() {
        let dict = Dictionary::from_words(["cat"]);
        let board = board_with("CAT", &[Owner::Ai, Owner::Ai, Owner::Ai]);
        let mut ledger = ScoreLedger::new();

        let highlights = ledger.apply_new_words(&board, scan(&board, &dict), Owner::Player);
        assert!(highlights.is_empty());
        assert_eq!(ledger.scores(), ScoreState::default());
        assert!(ledger.is_validated("cat"));

        // Even the rightful owner cannot claim it later
        ledger.apply_new_words(&board, scan(&board, &dict), Owner::Ai);
        assert_eq!(ledger.scores(), ScoreState::default());
    }

    #[test]
    fn test_same_word_elsewhere_not_rescored() {
        let dict = Dictionary::from_words(["cat"]);
        let mut board = board_with("CAT", &[Owner::Player; 3]);
        let mut ledger = ScoreLedger::new();
        ledger.apply_new_words(&board, scan(&board, &dict), Owner::Player);

        for (i, letter) in "CAT".chars().enumerate() {
            board.place(Hex::new(i as i8 - 2, 2), letter, Owner::Player);
        }
        ledger.apply_new_words(&board, scan(&board, &dict), Owner::Player);
        assert_eq!(ledger.scores().player, 5);
    }

    #[test]
    fn test_highlights_replaced() {
        let dict = Dictionary::from_words(["cat", "dog"]);
        let mut board = board_with("CAT", &[Owner::Player; 3]);
        let mut ledger = ScoreLedger::new();
        ledger.apply_new_words(&board, scan(&board, &dict), Owner::Player);

        for (i, letter) in "DOG".chars().enumerate() {
            board.place(Hex::new(i as i8 - 3, 3), letter, Owner::Player);
        }
        let highlights = ledger.apply_new_words(&board, scan(&board, &dict), Owner::Player);
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].word, "dog");
        assert_eq!(ledger.highlights()[0].points, 5);
        assert_eq!(ledger.validated_words(), vec!["cat", "dog"]);
    }
}
