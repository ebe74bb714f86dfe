//! In-memory player store.
//!
//! Each player's [`PlayerState`] sits behind its own async mutex so that a
//! round or a batch simulation holds exclusive access to that one player
//! for its whole read-modify-write, while requests for other players go
//! ahead. The outer map lock is only held long enough to look up or insert
//! a slot.
//!
//! Entries are created lazily on first reference and never evicted; the
//! store lives as long as the process.

use std::collections::BTreeMap;
use std::sync::Arc;

use cointoss_types::{PlayerId, PlayerState};
use tokio::sync::{Mutex, RwLock};

/// Shared handle to one player's state.
pub type PlayerSlot = Arc<Mutex<PlayerState>>;

/// Mapping from player id to game state.
#[derive(Debug, Default)]
pub struct PlayerStore {
    players: RwLock<BTreeMap<PlayerId, PlayerSlot>>,
}

impl PlayerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the slot for `player`, creating a default state if absent.
    pub async fn slot(&self, player: &PlayerId) -> PlayerSlot {
        {
            let players = self.players.read().await;
            if let Some(slot) = players.get(player) {
                return Arc::clone(slot);
            }
        }

        let mut players = self.players.write().await;
        Arc::clone(players.entry(player.clone()).or_default())
    }

    /// Copy of the player's current state. Creates the player if absent.
    pub async fn snapshot(&self, player: &PlayerId) -> PlayerState {
        let slot = self.slot(player).await;
        let state = slot.lock().await;
        state.clone()
    }

    /// Overwrite the player's state with fresh defaults.
    pub async fn reset(&self, player: &PlayerId) {
        let slot = self.slot(player).await;
        slot.lock().await.reset();
    }

    /// Number of players seen so far.
    pub async fn len(&self) -> usize {
        self.players.read().await.len()
    }

    /// Whether no player has been seen yet.
    pub async fn is_empty(&self) -> bool {
        self.players.read().await.is_empty()
    }
}
