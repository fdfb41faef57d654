//! World definition loader.
//!
//! # File format
//!
//! ```json
//! {
//!   "locations": [
//!     { "id": 1, "brief_description": "...", "long_description": "...",
//!       "available_commands": { "go east": 2 }, "items": ["mug"] }
//!   ],
//!   "items": [
//!     { "name": "mug", "description": "...", "start_position": 1,
//!       "target_position": 3, "target_points": 5 }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{ItemDefinition, LocationDefinition, LocationId, WorldRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One location as written in the world file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    pub id: u32,
    pub brief_description: String,
    pub long_description: String,
    #[serde(default)]
    pub available_commands: BTreeMap<String, u32>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One item as written in the world file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_position: u32,
    pub target_position: u32,
    pub target_points: u32,
}

/// Top-level structure of the world JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldFile {
    pub locations: Vec<LocationEntry>,
    pub items: Vec<ItemEntry>,
}

impl WorldFile {
    /// Validates the raw data and builds the registry.
    pub fn into_registry(self) -> Result<WorldRegistry, game_core::WorldError> {
        let locations = self
            .locations
            .into_iter()
            .map(|entry| {
                let mut location = LocationDefinition::new(
                    LocationId(entry.id),
                    entry.brief_description,
                    entry.long_description,
                );
                location.commands = entry
                    .available_commands
                    .into_iter()
                    .map(|(command, destination)| (command, LocationId(destination)))
                    .collect();
                location.items = entry.items;
                location
            })
            .collect();

        let items = self
            .items
            .into_iter()
            .map(|entry| {
                ItemDefinition::new(
                    entry.name,
                    LocationId(entry.start_position),
                    LocationId(entry.target_position),
                    entry.target_points,
                )
                .with_description(entry.description)
            })
            .collect();

        WorldRegistry::new(locations, items)
    }
}

/// Loader for the world definition from JSON files.
pub struct WorldLoader;

impl WorldLoader {
    /// Load and validate a world from a JSON file.
    pub fn load(path: &Path) -> LoadResult<WorldRegistry> {
        let content = read_file(path)?;
        let registry = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load world {}: {}", path.display(), e))?;
        tracing::info!(
            path = %path.display(),
            locations = registry.locations().count(),
            items = registry.item_count(),
            "world loaded"
        );
        Ok(registry)
    }

    pub fn parse(content: &str) -> LoadResult<WorldRegistry> {
        let file: WorldFile = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world JSON: {}", e))?;
        let registry = file.into_registry()?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: &str = r#"{
        "locations": [
            { "id": 1, "brief_description": "Hall.", "long_description": "A long hall.",
              "available_commands": { "go east": 2 }, "items": ["Mug"] },
            { "id": 2, "brief_description": "Yard.", "long_description": "An open yard.",
              "available_commands": { "go west": 1 } }
        ],
        "items": [
            { "name": "Mug", "description": "Chipped.", "start_position": 1,
              "target_position": 2, "target_points": 5 }
        ]
    }"#;

    #[test]
    fn parses_world_file() {
        let registry = WorldLoader::parse(WORLD).unwrap();

        let hall = registry.location(LocationId(1)).unwrap();
        assert_eq!(hall.destination("go east"), Some(("go east", LocationId(2))));
        let (id, mug) = registry.item_by_name("mug").unwrap();
        assert_eq!(mug.description, "Chipped.");
        assert_eq!(mug.target_location, LocationId(2));
        assert_eq!(registry.initial_items(LocationId(1)), &[id]);
    }

    #[test]
    fn integrity_errors_are_reported() {
        let broken = WORLD.replace("\"go west\": 1", "\"go west\": 9");
        let err = WorldLoader::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("unknown location 9"), "{err}");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = WorldLoader::parse("{ \"locations\": [").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse world JSON"));
    }
}
