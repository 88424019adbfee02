//! HEXWORD Core - Game engine and AI
//!
//! This crate provides the core game logic for HEXWORD:
//! - Board geometry (hex grid with axial coordinates)
//! - Directional word detection against a dictionary
//! - Scoring with a game-wide ledger of used words
//! - Greedy single-ply AI
//! - Rack, configuration and turn sequencing

pub mod board;
pub mod dictionary;
pub mod scanner;
pub mod scoring;
pub mod ai;
pub mod rack;
pub mod config;
pub mod game;
pub mod record;
pub mod error;

// Re-exports for convenient access
pub use board::{Hex, HexBoard, Owner, Tile, DIRECTIONS, BOARD_RADIUS, MAX_RADIUS};
pub use dictionary::{Dictionary, WordOracle, MIN_WORD_LEN};
pub use scanner::{scan, FoundWord, MAX_RUN_LEN};
pub use scoring::{letter_value, word_value, HighlightPath, ScoreLedger, ScoreState};
pub use ai::{potential_score, GreedyPlanner, PlannedMove, ALPHABET};
pub use rack::{LetterSource, Rack, RandomLetters, RACK_CAPACITY};
pub use config::{GameConfig, WIN_THRESHOLD};
pub use game::{check_winner, GameState, Phase, PlacedMove, SharedOracle, TurnReport, Winner};
pub use record::GameRecord;
pub use error::{GameError, PlacementError};
