//! Game records for saving and reviewing games

use crate::config::GameConfig;
use crate::game::{GameState, PlacedMove, Winner};
use crate::scoring::ScoreState;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable summary of a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub config: GameConfig,
    pub moves: Vec<PlacedMove>,
    pub scores: ScoreState,
    pub winner: Option<Winner>,
    pub validated_words: Vec<String>,
}

impl GameRecord {
    pub fn from_game(game: &GameState) -> Self {
        Self {
            config: game.config().clone(),
            moves: game.history().to_vec(),
            scores: game.scores(),
            winner: game.winner(),
            validated_words: game.ledger().validated_words(),
        }
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read game record: {}", path.display()))?;
        let record = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse game record: {}", path.display()))?;
        Ok(record)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write game record: {}", path.display()))?;
        Ok(())
    }
}
