//! Server state management
//!
//! One shared game session plus what is needed to start a new one.

use hexword_core::{GameConfig, GameError, GameState, SharedOracle};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Server-wide shared state
pub struct ServerState {
    pub config: GameConfig,
    pub oracle: SharedOracle,
    game: RwLock<GameState>,
}

impl ServerState {
    pub fn new(config: GameConfig, oracle: SharedOracle) -> Result<Self, GameError> {
        let game = GameState::new(config.clone(), oracle.clone())?;
        Ok(Self {
            config,
            oracle,
            game: RwLock::new(game),
        })
    }

    /// Read access to the current game
    pub fn game(&self) -> RwLockReadGuard<'_, GameState> {
        self.game.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Write access to the current game
    pub fn game_mut(&self) -> RwLockWriteGuard<'_, GameState> {
        self.game.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the current game with a fresh one
    pub fn restart(&self, seed: Option<u64>) -> Result<(), GameError> {
        let config = GameConfig {
            seed: seed.or(self.config.seed),
            ..self.config.clone()
        };
        let game = GameState::new(config, self.oracle.clone())?;
        *self.game_mut() = game;
        Ok(())
    }
}
