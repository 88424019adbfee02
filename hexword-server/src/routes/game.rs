//! Game API endpoints
//!
//! Starting a game, reading its state and submitting player placements.

use crate::state::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hexword_core::{GameError, GameState, Hex, HighlightPath, Phase, ScoreState, TurnReport, Winner};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Game error mapped onto an HTTP status
pub struct ApiError(GameError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GameError::GameOver | GameError::Placement(_) => StatusCode::CONFLICT,
            GameError::InvalidLetter(_) | GameError::LetterNotInRack(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            GameError::InvalidConfiguration { .. } => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        Self(e)
    }
}

/// Everything a front end needs to draw the sidebar
#[derive(Serialize)]
pub struct GameView {
    pub phase: Phase,
    pub scores: ScoreState,
    pub rack: Vec<char>,
    pub highlights: Vec<HighlightPath>,
    pub winner: Option<Winner>,
    pub moves: usize,
    pub validated_words: Vec<String>,
}

impl GameView {
    fn of(game: &GameState) -> Self {
        Self {
            phase: game.phase(),
            scores: game.scores(),
            rack: game.rack().letters().to_vec(),
            highlights: game.last_highlights().to_vec(),
            winner: game.winner(),
            moves: game.history().len(),
            validated_words: game.ledger().validated_words(),
        }
    }
}

/// Get current game state
pub async fn get_game(State(state): State<Arc<ServerState>>) -> Json<GameView> {
    Json(GameView::of(&state.game()))
}

#[derive(Deserialize, Default)]
pub struct StartRequest {
    pub seed: Option<u64>,
}

/// Start a new game, discarding the current one
pub async fn start_game(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<StartRequest>,
) -> Result<Json<GameView>, ApiError> {
    state.restart(req.seed)?;
    tracing::info!("Game restarted (seed {:?})", req.seed);
    Ok(Json(GameView::of(&state.game())))
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub q: i8,
    pub r: i8,
    pub letter: char,
}

/// Place the player's letter; the AI replies within the same request
pub async fn make_player_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<TurnReport>, ApiError> {
    let report = state
        .game_mut()
        .request_placement(Hex::new(req.q, req.r), req.letter)?;
    Ok(Json(report))
}
