//! Request bodies and response payloads of the HTTP API.
//!
//! Field names are part of the wire contract consumed by the frontend.
//! Wealth figures in responses are already rounded by the producer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::CoinSide;
use crate::state::STARTING_WEALTH;

const fn default_win_return() -> f64 {
    0.5
}

const fn default_lose_return() -> f64 {
    -0.4
}

const fn default_current_wealth() -> f64 {
    STARTING_WEALTH
}

fn default_simulation_type() -> String {
    String::from("random")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /api/coin-toss/{player_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CoinTossRequest {
    /// The player's call, `"heads"` or `"tails"` (case-insensitive).
    pub choice: String,
    /// Fractional return applied on a win (`0.5` is +50%).
    #[serde(default = "default_win_return")]
    pub win_return: f64,
    /// Fractional return applied on a loss (`-0.4` is -40%).
    #[serde(default = "default_lose_return")]
    pub lose_return: f64,
    /// Wealth the round starts from, supplied by the caller.
    #[serde(default = "default_current_wealth")]
    pub current_wealth: f64,
}

/// Body of `POST /api/simulate/{player_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationRequest {
    /// Number of tosses to simulate.
    pub num_tosses: u32,
    /// Fractional return applied on a win.
    #[serde(default = "default_win_return")]
    pub win_return: f64,
    /// Fractional return applied on a loss.
    #[serde(default = "default_lose_return")]
    pub lose_return: f64,
    /// `"random"`, `"heads"` or `"tails"`; anything else behaves as random.
    #[serde(default = "default_simulation_type")]
    pub simulation_type: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RoundOutcome {
    /// The side the coin landed on.
    pub coin_result: CoinSide,
    /// The player's call, lowercased.
    pub player_choice: String,
    /// Whether the call matched the coin.
    pub player_won: bool,
    /// Wealth the round started from, as supplied (unrounded).
    pub previous_wealth: f64,
    /// Wealth after the round, rounded to cents.
    pub new_wealth: f64,
    /// Rounds played so far, including this one.
    pub round_number: u64,
    /// Rounds won so far.
    pub total_wins: u64,
    /// Rounds lost so far.
    pub total_losses: u64,
    /// Full wealth history, rounded to cents.
    pub wealth_history: Vec<f64>,
    /// Expected growth factor per round, rounded to four places.
    pub expected_value: f64,
    /// Win return used.
    pub win_return: f64,
    /// Loss return used.
    pub lose_return: f64,
}

/// Current state of a player, as returned by `GET /api/game-state/{player_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameSnapshot {
    /// Latest wealth, rounded to cents.
    pub current_wealth: f64,
    /// Rounds played.
    pub round_number: u64,
    /// Rounds won.
    pub total_wins: u64,
    /// Rounds lost.
    pub total_losses: u64,
    /// Full wealth history, rounded to cents.
    pub wealth_history: Vec<f64>,
}

/// Result of a batch simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationReport {
    /// Wealth after the last toss, rounded to cents.
    pub final_wealth: f64,
    /// Number of tosses simulated.
    pub total_rounds: u64,
    /// Tosses won.
    pub total_wins: u64,
    /// Tosses lost.
    pub total_losses: u64,
    /// Full wealth history, rounded to cents.
    pub wealth_history: Vec<f64>,
    /// Expected growth factor per round, rounded to four places.
    pub expected_value: f64,
    /// Win return used.
    pub win_return: f64,
    /// Loss return used.
    pub lose_return: f64,
    /// Wealth the simulation started from.
    pub starting_wealth: f64,
    /// Simulation type, echoed as sent.
    pub simulation_type: String,
}
