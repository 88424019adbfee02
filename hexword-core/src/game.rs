//! Game state and turn sequencing

use crate::ai::GreedyPlanner;
use crate::board::{Hex, HexBoard, Owner, Tile};
use crate::config::GameConfig;
use crate::dictionary::WordOracle;
use crate::error::GameError;
use crate::rack::{LetterSource, Rack, RandomLetters};
use crate::scanner::scan;
use crate::scoring::{HighlightPath, ScoreLedger, ScoreState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Shared word oracle
pub type SharedOracle = Arc<dyn WordOracle + Send + Sync>;

/// Boxed rack refill source
pub type BoxedLetterSource = Box<dyn LetterSource + Send + Sync>;

/// Outcome of a finished game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Ai,
    Tie,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player => write!(f, "Player wins!"),
            Winner::Ai => write!(f, "AI wins!"),
            Winner::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Where the game is in its turn cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingPlayerInput,
    PlayerPlaced,
    ScoringPlayer,
    AiTurn,
    AiPlaced,
    ScoringAi,
    Finished(Winner),
}

/// A placement that went through, with what it earned
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMove {
    pub hex: Hex,
    pub letter: char,
    pub owner: Owner,
    pub points: u32,
    /// Words credited by this placement
    pub words: Vec<String>,
}

/// Everything that happened during one call to `request_placement`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlacedMove,
    /// Absent when the game ended before the AI moved
    pub ai: Option<PlacedMove>,
    pub scores: ScoreState,
    pub winner: Option<Winner>,
}

/// Winner by threshold, if any side has reached it
pub fn check_winner(scores: ScoreState, threshold: u32) -> Option<Winner> {
    match (scores.player >= threshold, scores.ai >= threshold) {
        (true, true) => Some(Winner::Tie),
        (true, false) => Some(Winner::Player),
        (false, true) => Some(Winner::Ai),
        (false, false) => None,
    }
}

/// Winner of a game that ran out of cells
fn stalemate_winner(scores: ScoreState) -> Winner {
    match scores.player.cmp(&scores.ai) {
        std::cmp::Ordering::Greater => Winner::Player,
        std::cmp::Ordering::Less => Winner::Ai,
        std::cmp::Ordering::Equal => Winner::Tie,
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Owner of all mutable game data: board, ledger, rack and history
pub struct GameState {
    config: GameConfig,
    board: HexBoard,
    ledger: ScoreLedger,
    rack: Rack,
    letters: BoxedLetterSource,
    oracle: SharedOracle,
    planner: GreedyPlanner,
    phase: Phase,
    history: Vec<PlacedMove>,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game with a random (or config-seeded) rack
    pub fn new(config: GameConfig, oracle: SharedOracle) -> Result<Self, GameError> {
        let letters = Box::new(RandomLetters::new(config.seed));
        Self::with_letter_source(config, oracle, letters)
    }

    /// New game drawing rack letters from `letters`
    pub fn with_letter_source(
        config: GameConfig,
        oracle: SharedOracle,
        mut letters: BoxedLetterSource,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let board = HexBoard::new(config.radius);
        let rack = Rack::new(config.rack_capacity, &mut *letters);

        tracing::info!(
            "New game: radius={}, {} cells, threshold={}",
            config.radius,
            board.len(),
            config.win_threshold
        );

        Ok(Self {
            config,
            board,
            ledger: ScoreLedger::new(),
            rack,
            letters,
            oracle,
            planner: GreedyPlanner::new(),
            phase: Phase::AwaitingPlayerInput,
            history: Vec::new(),
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    pub fn board_snapshot(&self) -> Vec<(Hex, Option<Tile>)> {
        self.board.snapshot()
    }

    pub fn scores(&self) -> ScoreState {
        self.ledger.scores()
    }

    pub fn last_highlights(&self) -> &[HighlightPath] {
        self.ledger.highlights()
    }

    pub fn winner(&self) -> Option<Winner> {
        match self.phase {
            Phase::Finished(winner) => Some(winner),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn history(&self) -> &[PlacedMove] {
        &self.history
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    // ========================================================================
    // TURN CYCLE
    // ========================================================================

    /// Play the human's letter at `hex`, then let the AI answer.
    ///
    /// Nothing changes when the request is refused.
    pub fn request_placement(&mut self, hex: Hex, letter: char) -> Result<TurnReport, GameError> {
        if self.phase != Phase::AwaitingPlayerInput {
            return Err(GameError::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_uppercase();
        if !self.rack.contains(letter) {
            return Err(GameError::LetterNotInRack(letter));
        }

        if let Err(e) = self.board.try_place(hex, letter, Owner::Player) {
            tracing::debug!("Placement refused: {}", e);
            return Err(e.into());
        }
        self.rack.consume(letter);
        self.rack.refill(&mut *self.letters);
        self.transition(Phase::PlayerPlaced);

        self.transition(Phase::ScoringPlayer);
        let player = self.score_placement(hex, letter, Owner::Player);

        if let Some(winner) = self.finish_if_over() {
            return Ok(TurnReport {
                player,
                ai: None,
                scores: self.scores(),
                winner: Some(winner),
            });
        }

        self.transition(Phase::AiTurn);
        let ai = self.play_ai_turn();
        let winner = self.finish_if_over();
        if winner.is_none() {
            self.transition(Phase::AwaitingPlayerInput);
        }

        Ok(TurnReport {
            player,
            ai,
            scores: self.scores(),
            winner,
        })
    }

    /// Search, place and score the AI's letter
    fn play_ai_turn(&mut self) -> Option<PlacedMove> {
        let planned = self.planner.choose_move(&self.board, &*self.oracle)?;

        if !self.board.place(planned.hex, planned.letter, Owner::Ai) {
            tracing::warn!("AI move {} at {} was refused", planned.letter, planned.hex);
            return None;
        }
        self.transition(Phase::AiPlaced);

        self.transition(Phase::ScoringAi);
        Some(self.score_placement(planned.hex, planned.letter, Owner::Ai))
    }

    /// Rescan the board and credit `owner` for new words
    fn score_placement(&mut self, hex: Hex, letter: char, owner: Owner) -> PlacedMove {
        let found = scan(&self.board, &*self.oracle);
        let highlights = self.ledger.apply_new_words(&self.board, found, owner);

        let placed = PlacedMove {
            hex,
            letter,
            owner,
            points: highlights.iter().map(|h| h.points).sum(),
            words: highlights.iter().map(|h| h.word.clone()).collect(),
        };

        tracing::debug!(
            "{:?} placed {} at {} for {} points",
            owner,
            letter,
            hex,
            placed.points
        );
        self.history.push(placed.clone());
        placed
    }

    /// End the game on threshold or on a full board
    fn finish_if_over(&mut self) -> Option<Winner> {
        let scores = self.scores();
        let winner = match check_winner(scores, self.config.win_threshold) {
            Some(winner) => winner,
            None if self.board.is_full() => {
                tracing::warn!("Board full without reaching {}", self.config.win_threshold);
                stalemate_winner(scores)
            }
            None => return None,
        };

        tracing::info!(
            "Game over: {} (player {}, AI {})",
            winner,
            scores.player,
            scores.ai
        );
        self.transition(Phase::Finished(winner));
        Some(winner)
    }

    fn transition(&mut self, next: Phase) {
        tracing::trace!("Phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

// ============================================================================
// TESTS
// ============================================================================
