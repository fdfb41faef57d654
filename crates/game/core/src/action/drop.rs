use crate::action::CommandTransition;
use crate::env::{ItemDefinition, WorldRegistry};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, ItemId, LocationId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropError {
    #[error("you aren't carrying '{0}'")]
    NotCarried(String),

    #[error("current location {0} is not in the world")]
    LocationMissing(LocationId),

    #[error("'{0}' did not move from the inventory into the location")]
    InventoryDesync(String),
}

impl GameError for DropError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotCarried(_) => ErrorSeverity::Recoverable,
            Self::LocationMissing(_) | Self::InventoryDesync(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotCarried(_) => "DROP_NOT_CARRIED",
            Self::LocationMissing(_) => "DROP_LOCATION_MISSING",
            Self::InventoryDesync(_) => "DROP_INVENTORY_DESYNC",
        }
    }
}

/// Puts a held item down in the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropAction {
    pub item: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropResult {
    pub item: ItemId,
    pub name: String,
    /// Target points awarded; zero unless dropped at the item's target.
    pub points: u32,
}

impl DropAction {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into().trim().to_string(),
        }
    }

    fn resolve<'w>(
        &self,
        state: &GameState,
        world: &'w WorldRegistry,
    ) -> Result<(ItemId, &'w ItemDefinition), DropError> {
        world
            .item_by_name(&self.item)
            .filter(|(id, _)| state.holds(*id))
            .ok_or_else(|| DropError::NotCarried(self.item.clone()))
    }
}

impl CommandTransition for DropAction {
    type Error = DropError;
    type Result = DropResult;

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
            .map_err(|_| DropError::LocationMissing(state.current_location))?;

        state.inventory.retain(|held| *held != id);
        state.world.place(here.id, id);

        let points = if here.id == item.target_location {
            item.target_points
        } else {
            0
        };
        state.score = state.score.saturating_add(points);
        state.history.append(
            here.id,
            here.brief_description.clone(),
            format!("drop {}", item.name),
        );

        Ok(DropResult {
            item: id,
            name: item.name.clone(),
            points,
        })
    }

    fn post_validate(&self, state: &GameState, world: &WorldRegistry) -> Result<(), Self::Error> {
        match world.item_by_name(&self.item) {
            Some((id, _))
                if !state.holds(id) && state.world.contains(state.current_location, id) =>
            {
                Ok(())
            }
            _ => Err(DropError::InventoryDesync(self.item.clone())),
        }
    }
}
