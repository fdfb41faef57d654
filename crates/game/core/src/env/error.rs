//! World registry errors.
//!
//! Everything except a failed lookup is raised while building the registry and
//! means the world data cannot be trusted.

use crate::error::{ErrorSeverity, GameError};
use crate::state::LocationId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("location {0} is defined more than once")]
    DuplicateLocation(LocationId),

    #[error("item '{0}' is defined more than once")]
    DuplicateItem(String),

    #[error("exit '{command}' of location {from} leads to unknown location {to}")]
    DanglingExit {
        from: LocationId,
        command: String,
        to: LocationId,
    },

    #[error("item '{item}' references unknown location {location}")]
    UnknownItemLocation { item: String, location: LocationId },

    #[error("location {location} lists '{item}', which is not in the item catalog")]
    UnknownItem { location: LocationId, item: String },

    #[error("item '{item}' is placed in both location {first} and location {second}")]
    ItemPlacedTwice {
        item: String,
        first: LocationId,
        second: LocationId,
    },

    #[error("item catalog exceeds {max} entries")]
    TooManyItems { max: usize },
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        use WorldError::*;
        match self {
            LocationNotFound(_) => ErrorSeverity::Validation,
            DuplicateLocation(_)
            | DuplicateItem(_)
            | DanglingExit { .. }
            | UnknownItemLocation { .. }
            | UnknownItem { .. }
            | ItemPlacedTwice { .. }
            | TooManyItems { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use WorldError::*;
        match self {
            LocationNotFound(_) => "WORLD_LOCATION_NOT_FOUND",
            DuplicateLocation(_) => "WORLD_DUPLICATE_LOCATION",
            DuplicateItem(_) => "WORLD_DUPLICATE_ITEM",
            DanglingExit { .. } => "WORLD_DANGLING_EXIT",
            UnknownItemLocation { .. } => "WORLD_UNKNOWN_ITEM_LOCATION",
            UnknownItem { .. } => "WORLD_UNKNOWN_ITEM",
            ItemPlacedTwice { .. } => "WORLD_ITEM_PLACED_TWICE",
            TooManyItems { .. } => "WORLD_TOO_MANY_ITEMS",
        }
    }
}
