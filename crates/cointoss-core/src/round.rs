//! Single-round execution.
//!
//! A round starts from the wealth the caller supplies, not from the stored
//! history. The stored history is a log of what the caller has played, and
//! the frontend is the one carrying wealth from round to round.

use cointoss_types::{CoinTossRequest, PlayerState, RoundOutcome};
use tracing::debug;

use crate::coin::Coin;
use crate::wealth::{apply_outcome, expected_value, round_cents, round_history, round_to};

/// Flip the coin once for `request` and record the result in `state`.
///
/// The call is compared case-insensitively. A call that is neither
/// `heads` nor `tails` never matches the coin and is recorded as a loss.
pub fn execute_round(
    state: &mut PlayerState,
    coin: &mut dyn Coin,
    request: &CoinTossRequest,
) -> RoundOutcome {
    let coin_result = coin.toss();
    let player_choice = request.choice.to_lowercase();
    let player_won = coin_result.matches(&player_choice);

    let previous_wealth = request.current_wealth;
    let new_wealth = apply_outcome(
        previous_wealth,
        player_won,
        request.win_return,
        request.lose_return,
    );

    state.record_round(player_won, new_wealth);

    debug!(
        coin = %coin_result,
        choice = player_choice,
        won = player_won,
        previous_wealth,
        new_wealth,
        round = state.round_number,
        "round played"
    );

    RoundOutcome {
        coin_result,
        player_choice,
        player_won,
        previous_wealth,
        new_wealth: round_cents(new_wealth),
        round_number: state.round_number,
        total_wins: state.total_wins,
        total_losses: state.total_losses,
        wealth_history: round_history(&state.wealth_history),
        expected_value: round_to(expected_value(request.win_return, request.lose_return), 4),
        win_return: request.win_return,
        lose_return: request.lose_return,
    }
}
