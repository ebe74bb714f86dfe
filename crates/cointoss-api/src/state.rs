//! Shared application state for the API server.
//!
//! [`AppState`] holds the [`Game`] (player store plus coin) and the CORS
//! allow-list. It is wrapped in [`Arc`] and injected through Axum's
//! `State` extractor, so tests can build an isolated instance with a
//! scripted coin.
//!
//! [`Arc`]: std::sync::Arc

use cointoss_core::Game;
use cointoss_core::config::GameConfig;

/// Shared state for the Axum application.
#[derive(Debug)]
pub struct AppState {
    /// Player store and coin.
    pub game: Game,
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
}

impl AppState {
    /// Wrap an existing game with the given CORS allow-list.
    pub const fn new(game: Game, allowed_origins: Vec<String>) -> Self {
        Self {
            game,
            allowed_origins,
        }
    }

    /// Build state from loaded configuration, with a fair coin.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Game::from_settings(&config.game),
            config.server.allowed_origins.clone(),
        )
    }
}
