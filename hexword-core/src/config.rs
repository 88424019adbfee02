//! Game configuration

use crate::board::{BOARD_RADIUS, MAX_RADIUS};
use crate::error::GameError;
use crate::rack::RACK_CAPACITY;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Score at which the game ends
pub const WIN_THRESHOLD: u32 = 150;

/// Tunable parameters of a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board radius
    pub radius: i8,
    /// Score that ends the game
    pub win_threshold: u32,
    /// Letters held by the human player
    pub rack_capacity: usize,
    /// Seed for rack refills (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            radius: BOARD_RADIUS,
            win_threshold: WIN_THRESHOLD,
            rack_capacity: RACK_CAPACITY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=MAX_RADIUS).contains(&self.radius) {
            return Err(GameError::InvalidConfiguration {
                message: format!("radius must be between 1 and {}, got {}", MAX_RADIUS, self.radius),
            });
        }
        if self.win_threshold == 0 {
            return Err(GameError::InvalidConfiguration {
                message: "win_threshold must be positive".to_string(),
            });
        }
        if self.rack_capacity == 0 {
            return Err(GameError::InvalidConfiguration {
                message: "rack_capacity must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Load from JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
