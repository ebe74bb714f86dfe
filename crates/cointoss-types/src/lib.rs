//! Shared type definitions for the coin toss volatility game.
//!
//! Every crate in the workspace speaks in these types. They also flow to
//! `TypeScript` via `ts-rs` so the dashboard frontend stays in sync with
//! the API payloads.
//!
//! # Modules
//!
//! - [`ids`] -- Player identifier wrapper
//! - [`enums`] -- Coin sides and batch simulation strategies
//! - [`state`] -- Per-player mutable game record
//! - [`payloads`] -- Request bodies and response payloads of the HTTP API

pub mod enums;
pub mod ids;
pub mod payloads;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use enums::{CoinSide, SimulationType};
pub use ids::PlayerId;
pub use payloads::{
    CoinTossRequest, GameSnapshot, RoundOutcome, SimulationReport, SimulationRequest,
};
pub use state::{PlayerState, STARTING_WEALTH};
