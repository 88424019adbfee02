//! HEXWORD CLI - Command-line interface
//!
//! Commands:
//! - play: Play a game against the AI in the terminal
//! - serve: Start the HTTP server for a browser front end

mod play;
mod render;
mod server;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexword_core::{Dictionary, GameConfig, SharedOracle};

#[derive(Parser)]
#[command(name = "hexword")]
#[command(about = "Hexagonal word game against a greedy AI")]
struct Cli {
    /// Game configuration JSON file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Word list, one word per line
    #[arg(long, global = true, value_name = "FILE", default_value = "sowpods.txt")]
    dictionary: PathBuf,

    /// Random seed for rack letters
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(play::PlayArgs),
    /// Start the HTTP server
    Serve(server::ServerArgs),
}

fn main() -> Result<()> {
    // Initialize logging; stdout belongs to the game display
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.seed)?;
    let dictionary: SharedOracle = Arc::new(
        Dictionary::load(&cli.dictionary).context("A word list is required (see --dictionary)")?,
    );

    match cli.command {
        Commands::Play(args) => play::run(args, config, dictionary),
        Commands::Serve(args) => server::run(args, config, dictionary),
    }
}

/// Config file (or defaults) with the command-line seed applied on top
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    Ok(config)
}
