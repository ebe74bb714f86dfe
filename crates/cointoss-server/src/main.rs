//! Server binary for the coin toss volatility game.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `cointoss-config.yaml` (or `COINTOSS_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the game (player store and fair coin)
//! 4. Serve the HTTP API until Ctrl-C

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use cointoss_api::{AppState, ServerConfig};
use cointoss_core::config::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "cointoss-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails.
#[tokio::main]
async fn main() -> Result<(), ServerBinError> {
    // 1. Load configuration (before logging, which it configures).
    let (config, config_source) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("cointoss-server starting");
    info!(
        source = config_source,
        host = config.server.host,
        port = config.server.port,
        allowed_origins = ?config.server.allowed_origins,
        max_tosses = config.game.max_tosses,
        seeded = config.game.seed.is_some(),
        "Configuration loaded"
    );

    // 3. Build the game.
    let state = Arc::new(AppState::from_config(&config));

    // 4. Serve until Ctrl-C.
    let server_config = ServerConfig::from(&config.server);
    cointoss_api::start_server(&server_config, state).await?;

    info!("cointoss-server exited cleanly");
    Ok(())
}

/// Load configuration from the YAML file if it exists, otherwise defaults.
///
/// Returns the config together with a description of where it came from,
/// for the startup log line.
fn load_config() -> Result<(GameConfig, String), ServerBinError> {
    let path = std::env::var("COINTOSS_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if path.exists() {
        let config = GameConfig::from_file(&path)?;
        Ok((config, path.display().to_string()))
    } else {
        let config = GameConfig::from_env()?;
        Ok((config, String::from("defaults")))
    }
}
