//! The game service.
//!
//! [`Game`] owns the [`PlayerStore`] and the coin, and is the only entry
//! point the HTTP layer talks to. Lock order is always player slot first,
//! then coin.

use cointoss_types::{
    CoinTossRequest, GameSnapshot, PlayerId, RoundOutcome, SimulationReport, SimulationRequest,
};
use tokio::sync::Mutex;
use tracing::info;

use crate::coin::{Coin, FairCoin};
use crate::config::GameSettings;
use crate::error::GameError;
use crate::round::execute_round;
use crate::simulation::run_simulation;
use crate::store::PlayerStore;
use crate::wealth::{round_cents, round_history};

/// Player store plus coin, shared across requests.
pub struct Game {
    store: PlayerStore,
    coin: Mutex<Box<dyn Coin>>,
    max_tosses: u32,
}

impl Game {
    /// Build a game around an explicit coin.
    pub fn new(coin: impl Coin + 'static, max_tosses: u32) -> Self {
        Self {
            store: PlayerStore::new(),
            coin: Mutex::new(Box::new(coin)),
            max_tosses,
        }
    }

    /// Build a game with a fair coin configured from `settings`.
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(FairCoin::from_seed_option(settings.seed), settings.max_tosses)
    }

    /// The underlying player store.
    pub const fn store(&self) -> &PlayerStore {
        &self.store
    }

    /// Largest batch a single simulation may run.
    pub const fn max_tosses(&self) -> u32 {
        self.max_tosses
    }

    /// Play one round for `player`.
    pub async fn play_round(&self, player: &PlayerId, request: &CoinTossRequest) -> RoundOutcome {
        let slot = self.store.slot(player).await;
        let mut state = slot.lock().await;
        let mut coin = self.coin.lock().await;
        execute_round(&mut state, &mut **coin, request)
    }

    /// Reset `player` and run a batch simulation.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::TooManyTosses`] when the batch exceeds the
    /// configured ceiling. The player's state is left untouched in that case.
    pub async fn simulate(
        &self,
        player: &PlayerId,
        request: &SimulationRequest,
    ) -> Result<SimulationReport, GameError> {
        if request.num_tosses > self.max_tosses {
            return Err(GameError::TooManyTosses {
                requested: request.num_tosses,
                max: self.max_tosses,
            });
        }

        let slot = self.store.slot(player).await;
        let mut state = slot.lock().await;
        let mut coin = self.coin.lock().await;
        Ok(run_simulation(&mut state, &mut **coin, request))
    }

    /// Current state of `player`, creating it if absent.
    pub async fn snapshot(&self, player: &PlayerId) -> GameSnapshot {
        let state = self.store.snapshot(player).await;
        GameSnapshot {
            current_wealth: round_cents(state.current_wealth()),
            round_number: state.round_number,
            total_wins: state.total_wins,
            total_losses: state.total_losses,
            wealth_history: round_history(&state.wealth_history),
        }
    }

    /// Overwrite `player`'s state with fresh defaults.
    pub async fn reset(&self, player: &PlayerId) {
        self.store.reset(player).await;
        info!(%player, "game reset");
    }
}

impl core::fmt::Debug for Game {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Game")
            .field("store", &self.store)
            .field("max_tosses", &self.max_tosses)
            .finish_non_exhaustive()
    }
}
