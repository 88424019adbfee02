//! Greedy single-ply AI

use crate::board::{Hex, HexBoard, DIRECTIONS};
use crate::dictionary::WordOracle;
use crate::scanner::{prefix_words, run_from};
use crate::scoring::word_value;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Letters the AI may place; it draws from no rack
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Bonus for each direction that yields at least one word
const DIRECTION_BONUS: u32 = 1;

// ============================================================================
// GREEDY PLANNER
// ============================================================================

/// A placement chosen by the planner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMove {
    pub hex: Hex,
    pub letter: char,
    pub potential: u32,
}

/// Exhaustive one-move search over every empty cell and letter.
///
/// There is no lookahead and no tile pool: each candidate is scored in
/// isolation and the first candidate with the strictly highest score wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlanner;

impl GreedyPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Pick the best placement, or `None` when the board has no empty cell
    pub fn choose_move<O: WordOracle + ?Sized>(&self, board: &HexBoard, oracle: &O) -> Option<PlannedMove> {
        let candidates: Vec<(Hex, char)> = board
            .empty_coordinates()
            .into_iter()
            .flat_map(|hex| ALPHABET.iter().map(move |&letter| (hex, letter)))
            .collect();

        let best = best_candidate(board, oracle, &candidates)?;

        tracing::debug!(
            "AI chose {} at {} (potential {}) from {} candidates",
            best.letter,
            best.hex,
            best.potential,
            candidates.len()
        );
        Some(best)
    }
}

/// Score of placing `letter` at `hex` for the AI.
///
/// Looks outward from `hex` in each direction: every word prefix of the run
/// adds its letter value, and each direction producing a word adds one more.
pub fn potential_score<O: WordOracle + ?Sized>(board: &HexBoard, oracle: &O, hex: Hex, letter: char) -> u32 {
    let mut score = 0;

    for &dir in &DIRECTIONS {
        let run = run_from(board, hex, letter, dir);
        let words = prefix_words(&run, oracle);
        if !words.is_empty() {
            score += words.iter().map(|w| word_value(&w.word)).sum::<u32>();
            score += DIRECTION_BONUS;
        }
    }

    score
}

// ============================================================================
// CANDIDATE SELECTION
// ============================================================================

#[cfg(not(feature = "parallel"))]
fn best_candidate<O: WordOracle + ?Sized>(
    board: &HexBoard,
    oracle: &O,
    candidates: &[(Hex, char)],
) -> Option<PlannedMove> {
    let mut best: Option<PlannedMove> = None;

    for &(hex, letter) in candidates {
        let potential = potential_score(board, oracle, hex, letter);
        if best.map_or(true, |b| potential > b.potential) {
            best = Some(PlannedMove { hex, letter, potential });
        }
    }

    best
}

#[cfg(feature = "parallel")]
fn best_candidate<O: WordOracle + ?Sized>(
    board: &HexBoard,
    oracle: &O,
    candidates: &[(Hex, char)],
) -> Option<PlannedMove> {
    // Lower index wins ties so the result matches sequential search
    let (index, potential) = candidates
        .par_iter()
        .enumerate()
        .map(|(i, &(hex, letter))| (i, potential_score(board, oracle, hex, letter)))
        .reduce_with(|a, b| {
            if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
                b
            } else {
                a
            }
        })?;

    let (hex, letter) = candidates[index];
    Some(PlannedMove { hex, letter, potential })
}

// ============================================================================
// TESTS
// ============================================================================
