//! HEXWORD Server - HTTP API for a browser front end
//!
//! This crate exposes one game session over HTTP:
//! - Board geometry and tiles
//! - Scores, rack, highlights and winner
//! - Player placements (the AI answers in the same request)
//! - Static file serving for the front end

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8003,
            static_dir: "hexword/web".to_string(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board geometry and tiles
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/api/game", get(routes::game::get_game))
        .route("/api/game/start", post(routes::game::start_game))
        .route("/api/game/move", post(routes::game::make_player_move))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig, state: ServerState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = create_router(&config, Arc::new(state));

    tracing::info!("HEXWORD Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
