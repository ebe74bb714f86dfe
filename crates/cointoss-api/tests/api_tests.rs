//! Integration tests for the coin toss API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. A scripted coin makes every outcome known ahead
//! of time.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use cointoss_api::router::build_router;
use cointoss_api::state::AppState;
use cointoss_core::{Coin, FairCoin, Game, ScriptedCoin};
use cointoss_types::CoinSide;
use serde_json::Value;
use tower::ServiceExt;

const FRONTEND: &str = "http://localhost:5173";

fn make_state(coin: impl Coin + 'static) -> Arc<AppState> {
    Arc::new(AppState::new(
        Game::new(coin, 1_000),
        vec![
            String::from("https://ct-frontend-production.up.railway.app"),
            String::from(FRONTEND),
        ],
    ))
}

fn heads_router() -> (Arc<AppState>, Router) {
    let state = make_state(ScriptedCoin::always(CoinSide::Heads));
    let router = build_router(Arc::clone(&state));
    (state, router)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(router: &Router, path: &str, body: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn get_json(router: &Router, path: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn approx(value: &Value, expected: f64) -> bool {
    value.as_f64().is_some_and(|v| (v - expected).abs() < 1e-9)
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_liveness_message() {
    let (_, router) = heads_router();
    let (status, json) = get_json(&router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Coin Toss Volatility Demo API");
}

#[tokio::test]
async fn test_coin_toss_win() {
    let (_, router) = heads_router();
    let (status, json) = post_json(&router, "/api/coin-toss/alice", r#"{"choice":"heads"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert_eq!(data["coin_result"], "heads");
    assert_eq!(data["player_choice"], "heads");
    assert_eq!(data["player_won"], true);
    assert!(approx(&data["previous_wealth"], 100.0));
    assert!(approx(&data["new_wealth"], 150.0));
    assert_eq!(data["round_number"], 1);
    assert_eq!(data["total_wins"], 1);
    assert_eq!(data["total_losses"], 0);
    assert!(approx(&data["expected_value"], 1.05));
    assert!(approx(&data["win_return"], 0.5));
    assert!(approx(&data["lose_return"], -0.4));
    assert_eq!(data["wealth_history"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_coin_toss_loss_with_custom_returns() {
    let (_, router) = heads_router();
    let body = r#"{"choice":"TAILS","win_return":0.2,"lose_return":-0.25,"current_wealth":80.0}"#;
    let (_, json) = post_json(&router, "/api/coin-toss/alice", body).await;

    let data = &json["data"];
    assert_eq!(data["player_choice"], "tails");
    assert_eq!(data["player_won"], false);
    assert!(approx(&data["previous_wealth"], 80.0));
    assert!(approx(&data["new_wealth"], 60.0));
    assert!(approx(&data["expected_value"], 0.975));
    assert!(approx(&data["wealth_history"][1], 60.0));
}

#[tokio::test]
async fn test_coin_toss_unknown_choice_loses() {
    let (_, router) = heads_router();
    let (_, json) = post_json(&router, "/api/coin-toss/alice", r#"{"choice":"edge"}"#).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["player_won"], false);
    assert_eq!(json["data"]["total_losses"], 1);
}

#[tokio::test]
async fn test_each_round_appends_one_history_entry() {
    let state = make_state(FairCoin::seeded(11));
    let router = build_router(state);

    for round in 1..=5_u64 {
        let (_, json) = post_json(&router, "/api/coin-toss/bob", r#"{"choice":"heads"}"#).await;
        let data = &json["data"];
        assert_eq!(data["round_number"], round);
        assert_eq!(
            data["total_wins"].as_u64().unwrap() + data["total_losses"].as_u64().unwrap(),
            round
        );
        assert_eq!(
            data["wealth_history"].as_array().unwrap().len(),
            usize::try_from(round).unwrap() + 1
        );
    }
}

#[tokio::test]
async fn test_malformed_body_returns_error_envelope() {
    let (_, router) = heads_router();
    let (status, json) = post_json(&router, "/api/coin-toss/alice", r#"{"choice":"heads","current_wealth":"lots"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn test_missing_choice_returns_error_envelope() {
    let (state, router) = heads_router();
    let (status, json) = post_json(&router, "/api/coin-toss/alice", "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    // A rejected request leaves no trace in the store.
    assert!(state.game.store().is_empty().await);
}

#[tokio::test]
async fn test_missing_content_type_returns_error_envelope() {
    let (_, router) = heads_router();
    let response = router
        .oneshot(
            Request::post("/api/coin-toss/alice")
                .body(Body::from(r#"{"choice":"heads"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_game_state_of_new_player() {
    let (state, router) = heads_router();
    let (status, json) = get_json(&router, "/api/game-state/newcomer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert!(approx(&data["current_wealth"], 100.0));
    assert_eq!(data["round_number"], 0);
    assert_eq!(data["total_wins"], 0);
    assert_eq!(data["total_losses"], 0);
    assert_eq!(data["wealth_history"], serde_json::json!([100.0]));
    // Reading creates the player.
    assert_eq!(state.game.store().len().await, 1);
}

#[tokio::test]
async fn test_game_state_reflects_rounds() {
    let (_, router) = heads_router();
    post_json(&router, "/api/coin-toss/carol", r#"{"choice":"heads"}"#).await;
    post_json(&router, "/api/coin-toss/carol", r#"{"choice":"heads","current_wealth":150.0}"#).await;

    let (_, json) = get_json(&router, "/api/game-state/carol").await;
    let data = &json["data"];
    assert!(approx(&data["current_wealth"], 225.0));
    assert_eq!(data["round_number"], 2);
    assert_eq!(data["total_wins"], 2);
}

#[tokio::test]
async fn test_simulate_always_heads() {
    let (_, router) = heads_router();
    let body = r#"{"num_tosses":5,"simulation_type":"heads"}"#;
    let (status, json) = post_json(&router, "/api/simulate/dave", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert!(approx(&data["final_wealth"], 759.38));
    assert_eq!(data["total_rounds"], 5);
    assert_eq!(data["total_wins"], 5);
    assert_eq!(data["total_losses"], 0);
    assert_eq!(data["wealth_history"].as_array().unwrap().len(), 6);
    assert!(approx(&data["starting_wealth"], 100.0));
    assert_eq!(data["simulation_type"], "heads");
    assert!(approx(&data["expected_value"], 1.05));
}

#[tokio::test]
async fn test_simulate_zero_tosses() {
    let (_, router) = heads_router();
    post_json(&router, "/api/coin-toss/erin", r#"{"choice":"heads"}"#).await;

    let (_, json) = post_json(&router, "/api/simulate/erin", r#"{"num_tosses":0}"#).await;
    assert_eq!(json["data"]["wealth_history"], serde_json::json!([100.0]));
    assert_eq!(json["data"]["simulation_type"], "random");

    let (_, json) = get_json(&router, "/api/game-state/erin").await;
    assert_eq!(json["data"]["round_number"], 0);
    assert_eq!(json["data"]["wealth_history"], serde_json::json!([100.0]));
}

#[tokio::test]
async fn test_simulate_over_limit_returns_error_envelope() {
    let (_, router) = heads_router();
    let (status, json) = post_json(&router, "/api/simulate/frank", r#"{"num_tosses":1001}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "num_tosses 1001 exceeds the maximum of 1000");
}

#[tokio::test]
async fn test_simulate_negative_tosses_returns_error_envelope() {
    let (_, router) = heads_router();
    let (_, json) = post_json(&router, "/api/simulate/frank", r#"{"num_tosses":-1}"#).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_reset_game() {
    let (_, router) = heads_router();
    post_json(&router, "/api/coin-toss/gina", r#"{"choice":"heads"}"#).await;
    post_json(&router, "/api/coin-toss/gina", r#"{"choice":"tails"}"#).await;

    let (status, json) = post_json(&router, "/api/reset-game/gina", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Game reset successfully");

    let (_, json) = get_json(&router, "/api/game-state/gina").await;
    let data = &json["data"];
    assert_eq!(data["wealth_history"], serde_json::json!([100.0]));
    assert_eq!(data["round_number"], 0);
    assert_eq!(data["total_wins"], 0);
    assert_eq!(data["total_losses"], 0);
}

#[tokio::test]
async fn test_players_are_isolated() {
    let (_, router) = heads_router();
    post_json(&router, "/api/coin-toss/hank", r#"{"choice":"heads"}"#).await;

    let (_, json) = get_json(&router, "/api/game-state/ivy").await;
    assert_eq!(json["data"]["round_number"], 0);
}

#[tokio::test]
async fn test_cors_allows_listed_origin() {
    let (_, router) = heads_router();
    let response = router
        .oneshot(
            Request::get("/")
                .header(header::ORIGIN, FRONTEND)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(allowed, FRONTEND);
}

#[tokio::test]
async fn test_cors_rejects_unlisted_origin() {
    let (_, router) = heads_router();
    let response = router
        .oneshot(
            Request::get("/")
                .header(header::ORIGIN, "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let (_, router) = heads_router();
    let response = router
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/coin-toss/alice")
                .header(header::ORIGIN, FRONTEND)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).is_some());
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let (_, router) = heads_router();
    let response = router
        .oneshot(Request::get("/api/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wildcard_origin_is_ignored() {
    let state = Arc::new(AppState::new(
        Game::new(ScriptedCoin::always(CoinSide::Heads), 10),
        vec![String::from("*"), String::from(FRONTEND)],
    ));
    let router = build_router(state);
    let response = router
        .oneshot(
            Request::get("/")
                .header(header::ORIGIN, FRONTEND)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        FRONTEND
    );
}

#[tokio::test]
async fn test_undecodable_player_id_returns_error_envelope() {
    let (state, router) = heads_router();

    let (status, json) = get_json(&router, "/api/game-state/%FF").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("player_id"));

    for path in [
        "/api/coin-toss/%FF",
        "/api/simulate/%FF",
        "/api/reset-game/%FF",
    ] {
        let (status, json) = post_json(&router, path, r#"{"choice":"heads","num_tosses":1}"#).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(json["success"], false, "{path}");
        assert!(json["error"].is_string(), "{path}");
    }

    assert!(state.game.store().is_empty().await);
}

#[tokio::test]
async fn test_half_cent_wealth_rounds_to_even() {
    let (_, router) = heads_router();
    let body = r#"{"choice":"heads","win_return":-0.5,"current_wealth":0.25}"#;
    let (_, json) = post_json(&router, "/api/coin-toss/pat", body).await;

    assert!(approx(&json["data"]["new_wealth"], 0.12));
    assert!(approx(&json["data"]["previous_wealth"], 0.25));
}
