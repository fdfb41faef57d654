use crate::state::LocationId;

/// Catalog entry for a deliverable item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub description: String,
    pub start_location: LocationId,
    pub target_location: LocationId,
    /// Score granted when dropped at `target_location`.
    pub target_points: u32,
}

impl ItemDefinition {
    pub fn new(
        name: impl Into<String>,
        start_location: LocationId,
        target_location: LocationId,
        target_points: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            start_location,
            target_location,
            target_points,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace.
    pub fn matches(&self, name: &str) -> bool {
        fold_name(&self.name) == fold_name(name)
    }
}

/// Lookup key for item names. Player input goes through the same folding.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}
