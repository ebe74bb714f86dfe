//! Enumeration types for the coin toss game.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Coin sides
// ---------------------------------------------------------------------------

/// One face of the coin. Serialized as lowercase `"heads"` / `"tails"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum CoinSide {
    /// Heads.
    Heads,
    /// Tails.
    Tails,
}

impl CoinSide {
    /// Lowercase wire label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heads => "heads",
            Self::Tails => "tails",
        }
    }

    /// Map a fair boolean draw onto a side (`true` is heads).
    pub const fn from_bool(heads: bool) -> Self {
        if heads { Self::Heads } else { Self::Tails }
    }

    /// Whether a player's (already normalized) call matches this side.
    ///
    /// Anything other than the exact label never matches, so unknown
    /// calls always lose.
    pub fn matches(self, call: &str) -> bool {
        self.as_str() == call
    }
}

impl core::fmt::Display for CoinSide {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Simulation strategies
// ---------------------------------------------------------------------------

/// How the simulated player calls the coin during a batch simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationType {
    /// A fresh uniformly random call every toss.
    Random,
    /// Always call heads.
    Heads,
    /// Always call tails.
    Tails,
}

impl SimulationType {
    /// Interpret a request label. Unknown labels fall back to [`Self::Random`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "heads" => Self::Heads,
            "tails" => Self::Tails,
            _ => Self::Random,
        }
    }

    /// The fixed side this strategy always calls, if any.
    pub const fn fixed_call(self) -> Option<CoinSide> {
        match self {
            Self::Random => None,
            Self::Heads => Some(CoinSide::Heads),
            Self::Tails => Some(CoinSide::Tails),
        }
    }
}
