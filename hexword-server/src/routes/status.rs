//! Health check with the rules of the running session

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexword_core::Phase;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub radius: i8,
    pub cells: usize,
    pub win_threshold: u32,
    pub phase: Phase,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    let game = state.game();
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        radius: game.board().radius(),
        cells: game.board().len(),
        win_threshold: game.config().win_threshold,
        phase: game.phase(),
    })
}
