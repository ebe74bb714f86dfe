//! Axum router construction.
//!
//! Assembles all routes into a single [`Router`] with CORS restricted to the
//! configured origins. Credentials are allowed, so methods and headers are
//! listed or mirrored rather than wildcarded.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- liveness message
/// - `POST /api/coin-toss/{player_id}` -- play one round
/// - `GET /api/game-state/{player_id}` -- player snapshot
/// - `POST /api/simulate/{player_id}` -- batch simulation
/// - `POST /api/reset-game/{player_id}` -- reset the player
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/coin-toss/{player_id}", post(handlers::play_coin_toss))
        .route("/api/game-state/{player_id}", get(handlers::get_game_state))
        .route("/api/simulate/{player_id}", post(handlers::simulate_tosses))
        .route("/api/reset-game/{player_id}", post(handlers::reset_game))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy allowing only `origins`. Wildcards and origins that are not
/// valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| {
            let wildcard = origin.as_str() == "*";
            if wildcard {
                warn!("ignoring wildcard CORS origin; credentials require explicit origins");
            }
            !wildcard
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
