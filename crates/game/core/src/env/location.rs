use std::collections::BTreeMap;

use crate::state::LocationId;

/// Static part of a location: text, exits, and the items placed at start.
///
/// Which items are present *now* and whether the player has been here live in
/// [`crate::state::WorldState`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationDefinition {
    pub id: LocationId,
    pub brief_description: String,
    pub long_description: String,
    /// Command string (e.g. `"go east"`) to destination.
    pub commands: BTreeMap<String, LocationId>,
    /// Item names present when the game starts.
    pub items: Vec<String>,
}

impl LocationDefinition {
    pub fn new(
        id: LocationId,
        brief_description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            brief_description: brief_description.into(),
            long_description: long_description.into(),
            commands: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    pub fn with_exit(mut self, command: impl Into<String>, destination: LocationId) -> Self {
        self.commands.insert(command.into(), destination);
        self
    }

    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.items.push(name.into());
        self
    }

    /// Resolves a movement command against this location's exits.
    ///
    /// Tries the exact table key first. `"go <direction>"` falls back to the
    /// bare `"<direction>"` key, and a bare direction falls back to
    /// `"go <direction>"`.
    pub fn destination(&self, command: &str) -> Option<(&str, LocationId)> {
        let command = command.trim();
        let fallback = match command.strip_prefix("go ") {
            Some(direction) => direction.trim().to_string(),
            None => format!("go {command}"),
        };
        [command, fallback.as_str()].into_iter().find_map(|key| {
            self.commands
                .get_key_value(key)
                .map(|(key, destination)| (key.as_str(), *destination))
        })
    }

    pub fn description(&self, long: bool) -> &str {
        if long {
            &self.long_description
        } else {
            &self.brief_description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_accepts_key_or_bare_direction() {
        let location = LocationDefinition::new(LocationId(1), "hall", "a long hall")
            .with_exit("go east", LocationId(2))
            .with_exit("buy coffee", LocationId(1))
            .with_exit("north", LocationId(3));

        assert_eq!(location.destination("go east"), Some(("go east", LocationId(2))));
        assert_eq!(location.destination("east"), Some(("go east", LocationId(2))));
        assert_eq!(
            location.destination("buy coffee"),
            Some(("buy coffee", LocationId(1)))
        );
        assert_eq!(location.destination("go north"), Some(("north", LocationId(3))));
        assert_eq!(location.destination("west"), None);
    }
}
