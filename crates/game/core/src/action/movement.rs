use crate::action::CommandTransition;
use crate::env::WorldRegistry;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, LocationId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("current location {0} is not in the world")]
    LocationMissing(LocationId),

    #[error("you can't '{command}' from here")]
    NoExit {
        location: LocationId,
        command: String,
    },

    #[error("history ends at {logged} but the player is at {actual}")]
    HistoryDesync {
        logged: LocationId,
        actual: LocationId,
    },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoExit { .. } => ErrorSeverity::Recoverable,
            Self::LocationMissing(_) | Self::HistoryDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LocationMissing(_) => "MOVE_LOCATION_MISSING",
            Self::NoExit { .. } => "MOVE_NO_EXIT",
            Self::HistoryDesync { .. } => "MOVE_HISTORY_DESYNC",
        }
    }
}

/// Follows an exit of the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    /// Exit key (`"go east"`, `"buy coffee"`) or bare direction.
    pub command: String,
}

/// What the player sees after moving.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    pub destination: LocationId,
    /// Long text on the first visit, brief afterwards.
    pub description: String,
    pub first_visit: bool,
}

impl MoveAction {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into().trim().to_lowercase(),
        }
    }

    fn resolve<'w>(
        &self,
        state: &GameState,
        world: &'w WorldRegistry,
    ) -> Result<(&'w str, LocationId), MoveError> {
        let here = world
            .location(state.current_location)
            .map_err(|_| MoveError::LocationMissing(state.current_location))?;
        here.destination(&self.command).ok_or_else(|| MoveError::NoExit {
            location: here.id,
            command: self.command.clone(),
        })
    }
}

impl CommandTransition for MoveAction {
    type Error = MoveError;
    type Result = MoveResult;

    fn pre_validate(&self, state: &GameState, world: &WorldRegistry) -> Result<(), Self::Error> {
        let (_, destination) = self.resolve(state, world)?;
        world
            .location(destination)
            .map_err(|_| MoveError::LocationMissing(destination))?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        world: &WorldRegistry,
    ) -> Result<Self::Result, Self::Error> {
        let (key, destination) = self.resolve(state, world)?;
        let target = world
            .location(destination)
            .map_err(|_| MoveError::LocationMissing(destination))?;

        state.current_location = destination;
        let first_visit = state.world.mark_visited(destination);
        state
            .history
            .append(destination, target.long_description.clone(), key);

        Ok(MoveResult {
            destination,
            description: target.description(first_visit).to_string(),
            first_visit,
        })
    }

    fn post_validate(&self, state: &GameState, _world: &WorldRegistry) -> Result<(), Self::Error> {
        match state.history.last() {
            Some(last) if last.location == state.current_location => Ok(()),
            Some(last) => Err(MoveError::HistoryDesync {
                logged: last.location,
                actual: state.current_location,
            }),
            None => Err(MoveError::LocationMissing(state.current_location)),
        }
    }
}
