//! Example to run the HEXWORD server standalone
//!
//! Run with: cargo run -p hexword-server --example run_server -- words.txt

use hexword_core::{Dictionary, GameConfig};
use hexword_server::{run_server, ServerConfig, ServerState};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let words = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sowpods.txt"));
    let dictionary = Dictionary::load(&words)?;

    let config = ServerConfig::default();
    let state = ServerState::new(GameConfig::default(), Arc::new(dictionary))?;

    println!("Starting HEXWORD server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);

    run_server(config, state).await
}
