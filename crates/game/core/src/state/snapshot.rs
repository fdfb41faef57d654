//! Deep copies of the mutable state for undo and restart.

use std::collections::{BTreeMap, BTreeSet};

use super::{EventTriple, GameState, GameStatus, GateFlag, ItemId, LocationId};

/// Immutable copy of everything a command can change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    current_location: LocationId,
    moves_used: u32,
    score: u32,
    status: GameStatus,
    inventory: Vec<ItemId>,
    location_items: BTreeMap<LocationId, Vec<ItemId>>,
    visited: BTreeSet<LocationId>,
    events: Vec<EventTriple>,
    gates: BTreeSet<GateFlag>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            current_location: state.current_location,
            moves_used: state.moves_used,
            score: state.score,
            status: state.status,
            inventory: state.inventory.clone(),
            location_items: state.world.item_lists().clone(),
            visited: state.world.visited().clone(),
            events: state.history.export_all(),
            gates: state.gates.clone(),
        }
    }

    /// Overwrites every mutable field of `state` with this snapshot.
    pub fn restore(&self, state: &mut GameState) {
        state.current_location = self.current_location;
        state.moves_used = self.moves_used;
        state.score = self.score;
        state.status = self.status;
        state.inventory = self.inventory.clone();
        state
            .world
            .replace(self.location_items.clone(), self.visited.clone());
        state.history.replace_all(self.events.iter().cloned());
        state.gates = self.gates.clone();
    }
}

/// LIFO stack of undo checkpoints plus the construction-time snapshot.
#[derive(Clone, Debug)]
pub struct SnapshotManager {
    initial: Snapshot,
    stack: Vec<Snapshot>,
}

impl SnapshotManager {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            initial,
            stack: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.stack.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Restores the last checkpoint into `state`. Returns false if there was
    /// nothing to undo.
    pub fn undo(&mut self, state: &mut GameState) -> bool {
        match self.pop() {
            Some(snapshot) => {
                snapshot.restore(state);
                true
            }
            None => false,
        }
    }

    /// Rewinds `state` to construction time and drops every checkpoint.
    pub fn restart(&mut self, state: &mut GameState) {
        self.initial.restore(state);
        self.clear();
        self.initial = Snapshot::capture(state);
    }
}
