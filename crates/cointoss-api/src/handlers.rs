//! REST API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Liveness message |
//! | `POST` | `/api/coin-toss/{player_id}` | Play one round |
//! | `GET` | `/api/game-state/{player_id}` | Current player snapshot |
//! | `POST` | `/api/simulate/{player_id}` | Reset, then run a batch |
//! | `POST` | `/api/reset-game/{player_id}` | Reset the player |
//!
//! Path and body extractors are taken as `Result<_, Rejection>` so that an
//! undecodable player id or a bad body becomes an [`ApiError`] envelope
//! instead of Axum's default plain-text 4xx.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use cointoss_types::{
    CoinTossRequest, GameSnapshot, PlayerId, RoundOutcome, SimulationReport, SimulationRequest,
};
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Liveness message returned by `GET /`.
pub const LIVENESS_MESSAGE: &str = "Coin Toss Volatility Demo API";

/// Confirmation returned by `POST /api/reset-game/{player_id}`.
pub const RESET_MESSAGE: &str = "Game reset successfully";

/// Successful response envelope: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    /// Always `true`.
    pub success: bool,
    /// The payload.
    pub data: T,
}

impl<T> Success<T> {
    /// Wrap a payload.
    pub const fn new(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Acknowledgement without a payload: `{"success": true, "message": ...}`.
#[derive(Debug, Serialize)]
pub struct Ack {
    /// Always `true`.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: &'static str,
}

/// Liveness body.
#[derive(Debug, Serialize)]
pub struct Liveness {
    /// Service banner.
    pub message: &'static str,
}

/// Turn the extracted `{player_id}` segment into a [`PlayerId`].
fn player_from(path: Result<Path<String>, PathRejection>) -> Result<PlayerId, ApiError> {
    let Path(player_id) = path?;
    Ok(PlayerId::from(player_id))
}

// ---------------------------------------------------------------------------
// GET / -- liveness
// ---------------------------------------------------------------------------

/// Report that the service is up.
pub async fn index() -> Json<Liveness> {
    Json(Liveness {
        message: LIVENESS_MESSAGE,
    })
}

// ---------------------------------------------------------------------------
// POST /api/coin-toss/{player_id} -- one round
// ---------------------------------------------------------------------------

/// Flip the coin once for the player.
pub async fn play_coin_toss(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<CoinTossRequest>, JsonRejection>,
) -> Result<Json<Success<RoundOutcome>>, ApiError> {
    let player = player_from(path)?;
    let Json(request) = body?;
    let outcome = state.game.play_round(&player, &request).await;
    Ok(Success::new(outcome))
}

// ---------------------------------------------------------------------------
// GET /api/game-state/{player_id} -- snapshot
// ---------------------------------------------------------------------------

/// Return the player's current wealth, counters and history.
///
/// Querying an unknown player creates it with default state.
pub async fn get_game_state(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Success<GameSnapshot>>, ApiError> {
    let player = player_from(path)?;
    Ok(Success::new(state.game.snapshot(&player).await))
}

// ---------------------------------------------------------------------------
// POST /api/simulate/{player_id} -- batch simulation
// ---------------------------------------------------------------------------

/// Reset the player, then simulate `num_tosses` rounds.
pub async fn simulate_tosses(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<Success<SimulationReport>>, ApiError> {
    let player = player_from(path)?;
    let Json(request) = body?;
    let report = state.game.simulate(&player, &request).await?;
    info!(
        %player,
        tosses = request.num_tosses,
        simulation_type = request.simulation_type,
        final_wealth = report.final_wealth,
        "simulation completed"
    );
    Ok(Success::new(report))
}

// ---------------------------------------------------------------------------
// POST /api/reset-game/{player_id} -- reset
// ---------------------------------------------------------------------------

/// Overwrite the player's state with fresh defaults.
pub async fn reset_game(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Ack>, ApiError> {
    let player = player_from(path)?;
    state.game.reset(&player).await;
    Ok(Json(Ack {
        success: true,
        message: RESET_MESSAGE,
    }))
}
