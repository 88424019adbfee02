//! Directional word detection

use crate::board::{Hex, HexBoard, DIRECTIONS};
use crate::dictionary::{WordOracle, MIN_WORD_LEN};
use serde::{Deserialize, Serialize};

/// Longest run followed from a starting cell (fixed, independent of radius)
pub const MAX_RUN_LEN: usize = 6;

/// A dictionary word spelled on the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    /// Lowercase spelling
    pub word: String,
    /// Cells visited, first letter to last
    pub path: Vec<Hex>,
}

/// Collect the run starting at `start` along `dir`, reading `start` as `first`.
///
/// The run stops at the first empty or off-board cell, or after
/// `MAX_RUN_LEN` cells.
pub(crate) fn run_from(board: &HexBoard, start: Hex, first: char, dir: (i8, i8)) -> Vec<(Hex, char)> {
    let mut run = Vec::with_capacity(MAX_RUN_LEN);
    run.push((start, first));

    for step in 1..MAX_RUN_LEN as i8 {
        let hex = start.offset(dir, step);
        match board.tile_at(hex) {
            Some(tile) => run.push((hex, tile.letter)),
            None => break,
        }
    }

    run
}

/// Every prefix of `run` with at least `MIN_WORD_LEN` letters that is a word
pub(crate) fn prefix_words<O: WordOracle + ?Sized>(run: &[(Hex, char)], oracle: &O) -> Vec<FoundWord> {
    let mut found = Vec::new();
    let mut word = String::with_capacity(run.len());

    for (k, &(_, letter)) in run.iter().enumerate() {
        word.push(letter.to_ascii_lowercase());
        if k + 1 >= MIN_WORD_LEN && oracle.is_word(&word) {
            found.push(FoundWord {
                word: word.clone(),
                path: run[..=k].iter().map(|&(hex, _)| hex).collect(),
            });
        }
    }

    found
}

/// Scan the whole board for words.
///
/// Every occupied cell is tried as a start in every direction, so the same
/// letters read in opposite directions from different cells show up as
/// separate entries. Output order is cell order, then direction order, then
/// increasing length.
pub fn scan<O: WordOracle + ?Sized>(board: &HexBoard, oracle: &O) -> Vec<FoundWord> {
    let mut found = Vec::new();

    for (hex, tile) in board.tiles() {
        for &dir in &DIRECTIONS {
            let run = run_from(board, hex, tile.letter, dir);
            found.extend(prefix_words(&run, oracle));
        }
    }

    tracing::debug!("Scan found {} words", found.len());
    found
}
