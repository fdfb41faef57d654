//! Read-only world data.
//!
//! The [`WorldRegistry`] owns the location graph and the item catalog. It is
//! validated once when built and never mutated afterwards; the engine shares it
//! behind an `Arc` and keeps all per-playthrough changes in
//! [`crate::state::GameState`].
mod error;
mod items;
mod location;

pub use error::WorldError;
pub use items::{ItemDefinition, fold_name};
pub use location::LocationDefinition;

use std::collections::BTreeMap;

use crate::state::{ItemId, LocationId};

/// Location graph plus item catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldRegistry {
    locations: BTreeMap<LocationId, LocationDefinition>,
    items: Vec<ItemDefinition>,
    /// Initial item placement resolved to catalog ids.
    placements: BTreeMap<LocationId, Vec<ItemId>>,
}

impl WorldRegistry {
    /// Builds and validates a registry.
    ///
    /// # Errors
    ///
    /// Any dangling reference or duplicate definition is rejected with a
    /// fatal [`WorldError`].
    pub fn new(
        locations: Vec<LocationDefinition>,
        items: Vec<ItemDefinition>,
    ) -> Result<Self, WorldError> {
        if items.len() > usize::from(u16::MAX) {
            return Err(WorldError::TooManyItems {
                max: usize::from(u16::MAX),
            });
        }

        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|other| other.matches(&item.name)) {
                return Err(WorldError::DuplicateItem(item.name.clone()));
            }
        }

        let mut by_id = BTreeMap::new();
        for mut location in locations {
            location.commands = location
                .commands
                .into_iter()
                .map(|(command, destination)| (command.trim().to_lowercase(), destination))
                .collect();
            let id = location.id;
            if by_id.insert(id, location).is_some() {
                return Err(WorldError::DuplicateLocation(id));
            }
        }

        for location in by_id.values() {
            for (command, destination) in &location.commands {
                if !by_id.contains_key(destination) {
                    return Err(WorldError::DanglingExit {
                        from: location.id,
                        command: command.clone(),
                        to: *destination,
                    });
                }
            }
        }

        for item in &items {
            for location in [item.start_location, item.target_location] {
                if !by_id.contains_key(&location) {
                    return Err(WorldError::UnknownItemLocation {
                        item: item.name.clone(),
                        location,
                    });
                }
            }
        }

        let mut placements: BTreeMap<LocationId, Vec<ItemId>> = BTreeMap::new();
        let mut placed_at: BTreeMap<ItemId, LocationId> = BTreeMap::new();
        for location in by_id.values() {
            let mut present = Vec::with_capacity(location.items.len());
            for name in &location.items {
                let id = Self::find(&items, name).ok_or_else(|| WorldError::UnknownItem {
                    location: location.id,
                    item: name.clone(),
                })?;
                if let Some(first) = placed_at.insert(id, location.id) {
                    return Err(WorldError::ItemPlacedTwice {
                        item: items[id.index()].name.clone(),
                        first,
                        second: location.id,
                    });
                }
                present.push(id);
            }
            placements.insert(location.id, present);
        }

        tracing::debug!(
            locations = by_id.len(),
            items = items.len(),
            "world registry built"
        );

        Ok(Self {
            locations: by_id,
            items,
            placements,
        })
    }

    fn find(items: &[ItemDefinition], name: &str) -> Option<ItemId> {
        items
            .iter()
            .position(|item| item.matches(name))
            .map(|index| ItemId(index as u16))
    }

    /// Returns the location with the given id.
    ///
    /// # Errors
    ///
    /// Returns `WorldError::LocationNotFound` if no such location exists.
    pub fn location(&self, id: LocationId) -> Result<&LocationDefinition, WorldError> {
        self.locations
            .get(&id)
            .ok_or(WorldError::LocationNotFound(id))
    }

    pub fn locations(&self) -> impl Iterator<Item = &LocationDefinition> {
        self.locations.values()
    }

    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.locations.keys().copied()
    }

    /// Case-insensitive catalog lookup.
    pub fn item_by_name(&self, name: &str) -> Option<(ItemId, &ItemDefinition)> {
        Self::find(&self.items, name).map(|id| (id, &self.items[id.index()]))
    }

    pub fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(id.index())
    }

    /// Display name of an item; falls back to the id for foreign handles.
    pub fn item_name(&self, id: ItemId) -> String {
        self.item(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// All catalog entries in definition order.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &ItemDefinition)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId(index as u16), item))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items present in `location` when the game starts.
    pub fn initial_items(&self, location: LocationId) -> &[ItemId] {
        self.placements
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};

    fn hall() -> LocationDefinition {
        LocationDefinition::new(LocationId(1), "Hall.", "A long hall.")
            .with_exit("Go East", LocationId(2))
            .with_item("Mug")
    }

    fn yard() -> LocationDefinition {
        LocationDefinition::new(LocationId(2), "Yard.", "An open yard.")
            .with_exit("go west", LocationId(1))
    }

    fn mug() -> ItemDefinition {
        ItemDefinition::new("Mug", LocationId(1), LocationId(2), 5)
    }

    #[test]
    fn builds_and_looks_up() {
        let registry = WorldRegistry::new(vec![hall(), yard()], vec![mug()]).unwrap();

        assert_eq!(registry.location(LocationId(2)).unwrap().brief_description, "Yard.");
        let (id, item) = registry.item_by_name("  mUG ").expect("item");
        assert_eq!(item.target_points, 5);
        assert_eq!(registry.initial_items(LocationId(1)), &[id]);
        assert!(registry.initial_items(LocationId(2)).is_empty());
        assert!(registry.item_by_name("spoon").is_none());
    }

    #[test]
    fn command_keys_are_normalised() {
        let registry = WorldRegistry::new(vec![hall(), yard()], vec![mug()]).unwrap();
        let hall = registry.location(LocationId(1)).unwrap();
        assert_eq!(hall.destination("east"), Some(("go east", LocationId(2))));
    }

    #[test]
    fn missing_location_is_not_found() {
        let registry = WorldRegistry::new(vec![hall(), yard()], vec![mug()]).unwrap();
        let err = registry.location(LocationId(9)).unwrap_err();
        assert_eq!(err, WorldError::LocationNotFound(LocationId(9)));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_dangling_exit() {
        let bad = hall().with_exit("go north", LocationId(42));
        let err = WorldRegistry::new(vec![bad, yard()], vec![mug()]).unwrap_err();
        assert!(matches!(err, WorldError::DanglingExit { to: LocationId(42), .. }));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn rejects_duplicate_item_names_ignoring_case() {
        let dup = ItemDefinition::new("MUG", LocationId(2), LocationId(1), 1);
        let err = WorldRegistry::new(vec![hall(), yard()], vec![mug(), dup]).unwrap_err();
        assert_eq!(err, WorldError::DuplicateItem("MUG".into()));
    }

    #[test]
    fn rejects_duplicate_item_names_beyond_ascii() {
        let upper = ItemDefinition::new("Éclair", LocationId(1), LocationId(2), 1);
        let lower = ItemDefinition::new("éclair", LocationId(2), LocationId(1), 1);
        let err = WorldRegistry::new(vec![hall(), yard()], vec![upper, lower]).unwrap_err();
        assert_eq!(err, WorldError::DuplicateItem("éclair".into()));
    }

    #[test]
    fn rejects_duplicate_location() {
        let err = WorldRegistry::new(vec![hall(), yard(), yard()], vec![mug()]).unwrap_err();
        assert_eq!(err, WorldError::DuplicateLocation(LocationId(2)));
    }

    #[test]
    fn rejects_unknown_item_in_location() {
        let bad = yard().with_item("spoon");
        let err = WorldRegistry::new(vec![hall(), bad], vec![mug()]).unwrap_err();
        assert_eq!(err.error_code(), "WORLD_UNKNOWN_ITEM");
    }

    #[test]
    fn rejects_item_targeting_missing_location() {
        let stray = ItemDefinition::new("Spoon", LocationId(1), LocationId(99), 1);
        let err = WorldRegistry::new(vec![hall(), yard()], vec![mug(), stray]).unwrap_err();
        assert!(matches!(
            err,
            WorldError::UnknownItemLocation { location: LocationId(99), .. }
        ));
    }

    #[test]
    fn rejects_item_placed_twice() {
        let bad = yard().with_item("mug");
        let err = WorldRegistry::new(vec![hall(), bad], vec![mug()]).unwrap_err();
        assert!(matches!(err, WorldError::ItemPlacedTwice { .. }));
    }
}
