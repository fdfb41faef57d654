use crate::action::CommandTransition;
use crate::env::{ItemDefinition, WorldRegistry};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, ItemId, LocationId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TakeError {
    #[error("there is no '{item}' here to take")]
    NotHere { item: String, location: LocationId },

    #[error("current location {0} is not in the world")]
    LocationMissing(LocationId),

    #[error("'{0}' did not move from the location into the inventory")]
    InventoryDesync(String),
}

impl GameError for TakeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotHere { .. } => ErrorSeverity::Recoverable,
            Self::LocationMissing(_) | Self::InventoryDesync(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotHere { .. } => "TAKE_NOT_HERE",
            Self::LocationMissing(_) => "TAKE_LOCATION_MISSING",
            Self::InventoryDesync(_) => "TAKE_INVENTORY_DESYNC",
        }
    }
}

/// Picks an item up from the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeAction {
    pub item: String,
    /// Score granted for the pickup.
    pub reward: u32,
}

impl TakeAction {
    pub fn new(item: impl Into<String>, reward: u32) -> Self {
        Self {
            item: item.into().trim().to_string(),
            reward,
        }
    }

    fn resolve<'w>(
        &self,
        state: &GameState,
        world: &'w WorldRegistry,
    ) -> Result<(ItemId, &'w ItemDefinition), TakeError> {
        world
            .item_by_name(&self.item)
            .filter(|(id, _)| state.world.contains(state.current_location, *id))
            .ok_or_else(|| TakeError::NotHere {
                item: self.item.clone(),
                location: state.current_location,
            })
    }
}

impl CommandTransition for TakeAction {
    type Error = TakeError;
    type Result = ItemId;

    fn pre_validate(&self, state: &GameState, world: &WorldRegistry) -> Result<(), Self::Error> {
        self.resolve(state, world).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        world: &WorldRegistry,
    ) -> Result<Self::Result, Self::Error> {
        let (id, item) = self.resolve(state, world)?;
        let here = world
            .location(state.current_location)
            .map_err(|_| TakeError::LocationMissing(state.current_location))?;

        state.world.remove(here.id, id);
        state.inventory.push(id);
        state.score = state.score.saturating_add(self.reward);
        state.history.append(
            here.id,
            here.brief_description.clone(),
            format!("take {}", item.name),
        );
        Ok(id)
    }

    fn post_validate(&self, state: &GameState, world: &WorldRegistry) -> Result<(), Self::Error> {
        let Some((id, item)) = world.item_by_name(&self.item) else {
            return Err(TakeError::InventoryDesync(self.item.clone()));
        };
        let held = state.inventory.iter().filter(|held| **held == id).count();
        if held == 1 && !state.world.contains(state.current_location, id) {
            Ok(())
        } else {
            Err(TakeError::InventoryDesync(item.name.clone()))
        }
    }
}
