//! Server command - start the HTTP server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to hexword-server crate)
//! - Level 4: configuration validation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use hexword_core::{GameConfig, SharedOracle};
use hexword_server::{run_server, ServerConfig, ServerState};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8003")]
    pub port: u16,

    /// Directory containing static files for the front end
    #[arg(long, default_value = "hexword/web")]
    pub static_dir: PathBuf,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs, config: GameConfig, oracle: SharedOracle) -> Result<()> {
    let server_config = configure_server(&args)?;
    let state = ServerState::new(config, oracle)?;

    tracing::info!(
        "Starting HEXWORD server on port {}",
        server_config.port
    );

    start_server(server_config, state)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig, state: ServerState) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config, state).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Validate that static directory exists
fn validate_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Only the API will be served.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_server_defaults() {
        let args = ServerArgs {
            port: 8003,
            static_dir: PathBuf::from("test_static"),
        };

        let config = configure_server(&args).unwrap();
        assert_eq!(config.port, 8003);
        assert_eq!(config.static_dir, "test_static");
    }

    #[test]
    fn test_validate_static_dir_nonexistent() {
        // Should not error, just warn
        let result = validate_static_dir(Path::new("/nonexistent/path"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_static_dir_is_file() {
        let result = validate_static_dir(Path::new("Cargo.toml"));
        assert!(result.is_err());
    }
}
