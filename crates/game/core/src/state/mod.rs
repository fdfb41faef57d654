//! Authoritative mutable game state.
//!
//! This module owns the per-playthrough data: position, inventory, score,
//! move counter, gate flags, per-location item presence, and the event
//! history. Callers read it freely but mutate it exclusively through
//! [`crate::engine::GameEngine`].
mod history;
mod ids;
mod snapshot;
mod world;

pub use history::{EventHistory, EventRecord, EventTriple};
pub use ids::{GateFlag, ItemId, LocationId};
pub use snapshot::{Snapshot, SnapshotManager};
pub use world::WorldState;

use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::env::{WorldError, WorldRegistry};

/// Where a playthrough stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// Every item reached its target location.
    Won,
    /// The moves budget ran out.
    Lost,
    /// The player left the game.
    Quit,
}

impl GameStatus {
    pub const fn is_ongoing(self) -> bool {
        matches!(self, Self::Ongoing)
    }
}

/// Canonical mutable state of one playthrough.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub current_location: LocationId,
    /// Held items in pickup order. Never contains duplicates.
    pub inventory: Vec<ItemId>,
    /// Only ever increases.
    pub score: u32,
    pub moves_used: u32,
    /// Set once from config and never modified.
    pub max_moves: u32,
    pub status: GameStatus,
    /// Puzzle gates opened so far.
    pub gates: BTreeSet<GateFlag>,
    pub world: WorldState,
    pub history: EventHistory,
}

impl GameState {
    /// Creates the starting state and logs the opening event.
    ///
    /// # Errors
    ///
    /// Returns `WorldError::LocationNotFound` if the configured start location
    /// does not exist.
    pub fn new(registry: &WorldRegistry, config: &GameConfig) -> Result<Self, WorldError> {
        let start = registry.location(config.start_location)?;
        let mut history = EventHistory::new();
        history.start(start.id, start.long_description.clone());

        Ok(Self {
            current_location: start.id,
            inventory: Vec::new(),
            score: 0,
            moves_used: 0,
            max_moves: config.max_moves,
            status: GameStatus::Ongoing,
            gates: BTreeSet::new(),
            world: WorldState::from_registry(registry),
            history,
        })
    }

    pub fn is_ongoing(&self) -> bool {
        self.status.is_ongoing()
    }

    pub fn holds(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    pub fn gate_open(&self, flag: &GateFlag) -> bool {
        self.gates.contains(flag)
    }
}
