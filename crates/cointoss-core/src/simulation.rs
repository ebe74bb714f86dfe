//! Batch simulation.
//!
//! A simulation wipes the player's record and replays `num_tosses` rounds
//! from [`STARTING_WEALTH`], carrying wealth forward from toss to toss.
//! The coin is drawn first each toss; a random strategy then draws the
//! player's call from the same coin.

use cointoss_types::{
    PlayerState, STARTING_WEALTH, SimulationReport, SimulationRequest, SimulationType,
};
use tracing::debug;

use crate::coin::Coin;
use crate::wealth::{apply_outcome, expected_value, round_cents, round_history, round_to};

/// Reset `state` and run the batch described by `request` against it.
pub fn run_simulation(
    state: &mut PlayerState,
    coin: &mut dyn Coin,
    request: &SimulationRequest,
) -> SimulationReport {
    state.reset();

    let strategy = SimulationType::from_label(&request.simulation_type);
    let mut wealth = STARTING_WEALTH;

    for _ in 0..request.num_tosses {
        let coin_result = coin.toss();
        let call = strategy.fixed_call().unwrap_or_else(|| coin.toss());
        let won = coin_result == call;

        wealth = apply_outcome(wealth, won, request.win_return, request.lose_return);
        state.record_round(won, wealth);
    }

    debug!(
        tosses = request.num_tosses,
        strategy = ?strategy,
        wins = state.total_wins,
        losses = state.total_losses,
        final_wealth = wealth,
        "simulation finished"
    );

    SimulationReport {
        final_wealth: round_cents(wealth),
        total_rounds: state.round_number,
        total_wins: state.total_wins,
        total_losses: state.total_losses,
        wealth_history: round_history(&state.wealth_history),
        expected_value: round_to(expected_value(request.win_return, request.lose_return), 4),
        win_return: request.win_return,
        lose_return: request.lose_return,
        starting_wealth: STARTING_WEALTH,
        simulation_type: request.simulation_type.clone(),
    }
}
