//! Per-player game record.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Wealth every player starts from, and the fixed starting point of a
/// batch simulation.
pub const STARTING_WEALTH: f64 = 100.0;

/// The mutable record of one player's wealth history and win/loss tallies.
///
/// Invariant: `total_wins + total_losses == round_number`, and the history
/// always holds at least the starting wealth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerState {
    /// Every wealth value reached, oldest first. Append-only.
    pub wealth_history: Vec<f64>,
    /// Rounds played since the last reset.
    pub round_number: u64,
    /// Rounds won since the last reset.
    pub total_wins: u64,
    /// Rounds lost since the last reset.
    pub total_losses: u64,
}

impl PlayerState {
    /// A fresh record holding only the starting wealth.
    pub fn new() -> Self {
        Self {
            wealth_history: vec![STARTING_WEALTH],
            round_number: 0,
            total_wins: 0,
            total_losses: 0,
        }
    }

    /// The most recent wealth value.
    pub fn current_wealth(&self) -> f64 {
        self.wealth_history.last().copied().unwrap_or(STARTING_WEALTH)
    }

    /// Record one finished round.
    pub fn record_round(&mut self, won: bool, new_wealth: f64) {
        if won {
            self.total_wins = self.total_wins.saturating_add(1);
        } else {
            self.total_losses = self.total_losses.saturating_add(1);
        }
        self.round_number = self.round_number.saturating_add(1);
        self.wealth_history.push(new_wealth);
    }

    /// Overwrite the record with fresh defaults.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
