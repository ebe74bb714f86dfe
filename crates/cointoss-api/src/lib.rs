//! HTTP API for the coin toss volatility game.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Liveness** (`GET /`)
//! - **Round play** (`POST /api/coin-toss/{player_id}`)
//! - **State query and reset** (`GET /api/game-state/{player_id}`,
//!   `POST /api/reset-game/{player_id}`)
//! - **Batch simulation** (`POST /api/simulate/{player_id}`)
//!
//! # Response envelope
//!
//! Every API response is HTTP 200 carrying `{"success": true, "data": ...}`
//! or `{"success": false, "error": "..."}`. Malformed bodies are caught at
//! the extractor and folded into the same envelope, so clients only ever
//! branch on `success`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
