use crate::env::WorldRegistry;
use crate::state::GameState;

/// Defines how a concrete command mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks receive
/// read-only access to the static world via `world` and must stay side-effect
/// free.
pub trait CommandTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _world: &WorldRegistry) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command by mutating the game state directly. Implementations
    /// should assume that `pre_validate` has already run successfully.
    fn apply(
        &self,
        state: &mut GameState,
        world: &WorldRegistry,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _world: &WorldRegistry) -> Result<(), Self::Error> {
        Ok(())
    }
}
