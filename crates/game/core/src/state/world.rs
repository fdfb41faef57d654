use std::collections::{BTreeMap, BTreeSet};

use super::{ItemId, LocationId};
use crate::env::WorldRegistry;

/// Per-location mutable data layered on top of the static registry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    /// Items currently lying in each location, in drop order.
    items: BTreeMap<LocationId, Vec<ItemId>>,
    visited: BTreeSet<LocationId>,
}

impl WorldState {
    /// Seeds item presence from the registry's initial placement.
    pub fn from_registry(registry: &WorldRegistry) -> Self {
        let items = registry
            .location_ids()
            .map(|id| (id, registry.initial_items(id).to_vec()))
            .collect();
        Self {
            items,
            visited: BTreeSet::new(),
        }
    }

    pub fn items_at(&self, location: LocationId) -> &[ItemId] {
        self.items
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, location: LocationId, item: ItemId) -> bool {
        self.items_at(location).contains(&item)
    }

    pub fn place(&mut self, location: LocationId, item: ItemId) {
        self.items.entry(location).or_default().push(item);
    }

    /// Removes `item` from `location`, returning whether it was there.
    pub fn remove(&mut self, location: LocationId, item: ItemId) -> bool {
        let Some(items) = self.items.get_mut(&location) else {
            return false;
        };
        match items.iter().position(|present| *present == item) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_visited(&self, location: LocationId) -> bool {
        self.visited.contains(&location)
    }

    /// Marks `location` visited, returning true on the first visit.
    pub fn mark_visited(&mut self, location: LocationId) -> bool {
        self.visited.insert(location)
    }

    pub fn item_lists(&self) -> &BTreeMap<LocationId, Vec<ItemId>> {
        &self.items
    }

    pub fn visited(&self) -> &BTreeSet<LocationId> {
        &self.visited
    }

    pub(crate) fn replace(
        &mut self,
        items: BTreeMap<LocationId, Vec<ItemId>>,
        visited: BTreeSet<LocationId>,
    ) {
        self.items = items;
        self.visited = visited;
    }
}
