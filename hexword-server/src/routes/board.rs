//! Board geometry and tile snapshot endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexword_core::{Owner, DIRECTIONS};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct TileView {
    pub pos: [i8; 2],
    pub letter: char,
    pub owner: Owner,
}

#[derive(Serialize)]
pub struct BoardInfo {
    pub radius: i8,
    pub hexes: Vec<[i8; 2]>,
    pub directions: Vec<[i8; 2]>,
    pub tiles: Vec<TileView>,
}

/// Get board geometry and the tiles placed so far
pub async fn get_board(State(state): State<Arc<ServerState>>) -> Json<BoardInfo> {
    let game = state.game();
    let board = game.board();

    Json(BoardInfo {
        radius: board.radius(),
        hexes: board.cells().map(|(hex, _)| [hex.q, hex.r]).collect(),
        directions: DIRECTIONS.iter().map(|&(dq, dr)| [dq, dr]).collect(),
        tiles: board
            .tiles()
            .map(|(hex, tile)| TileView {
                pos: [hex.q, hex.r],
                letter: tile.letter,
                owner: tile.owner,
            })
            .collect(),
    })
}
