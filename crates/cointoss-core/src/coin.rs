//! Coin sources.
//!
//! The round executor and the batch simulator draw every coin face (and,
//! for random batch strategies, every player call) from a [`Coin`]. The
//! server uses a [`FairCoin`]; tests swap in a `ScriptedCoin` (behind the
//! `test-util` feature) to force a known sequence.

use cointoss_types::CoinSide;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed coin faces.
pub trait Coin: Send {
    /// Flip the coin once.
    fn toss(&mut self) -> CoinSide;
}

/// A fair coin backed by a seedable PRNG.
#[derive(Debug, Clone)]
pub struct FairCoin {
    rng: StdRng,
}

impl FairCoin {
    /// A coin seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A reproducible coin.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is configured, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Coin for FairCoin {
    fn toss(&mut self) -> CoinSide {
        CoinSide::from_bool(self.rng.random_bool(0.5))
    }
}

/// A coin that replays a fixed cycle of faces.
///
/// An empty script behaves as an endless run of heads.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone)]
pub struct ScriptedCoin {
    script: Vec<CoinSide>,
    cursor: usize,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedCoin {
    /// Replay `script` in order, wrapping around at the end.
    pub const fn new(script: Vec<CoinSide>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A coin that always lands on `side`.
    pub fn always(side: CoinSide) -> Self {
        Self::new(vec![side])
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Coin for ScriptedCoin {
    fn toss(&mut self) -> CoinSide {
        let side = self
            .script
            .get(self.cursor)
            .copied()
            .unwrap_or(CoinSide::Heads);
        self.cursor = match self.cursor.checked_add(1) {
            Some(next) if next < self.script.len() => next,
            _ => 0,
        };
        side
    }
}
