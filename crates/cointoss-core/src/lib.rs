//! Game logic for the coin toss volatility demo.
//!
//! The crate is layered bottom-up:
//!
//! - [`wealth`] -- Pure compounding and expected-value arithmetic.
//! - [`coin`] -- [`Coin`] trait with a fair random coin, plus a scripted
//!   coin for deterministic runs under the `test-util` feature.
//! - [`round`] -- One toss applied to a player's state.
//! - [`simulation`] -- Reset-then-repeat batch runs.
//! - [`store`] -- In-memory player store with per-player locking.
//! - [`game`] -- [`Game`] service tying the store and the coin together.
//! - [`config`] -- Configuration loading from `cointoss-config.yaml`.
//!
//! [`Coin`]: coin::Coin
//! [`Game`]: game::Game

pub mod coin;
pub mod config;
pub mod error;
pub mod game;
pub mod round;
pub mod simulation;
pub mod store;
pub mod wealth;

pub use coin::{Coin, FairCoin};
#[cfg(any(test, feature = "test-util"))]
pub use coin::ScriptedCoin;
pub use error::GameError;
pub use game::Game;
pub use store::PlayerStore;
