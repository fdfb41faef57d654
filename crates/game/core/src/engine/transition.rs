//! Three-phase transition driver.
//!
//! The engine splits the pipeline in two so that gate checks can run between
//! validation and the checkpoint:
//! 1. [`validate`] - `pre_validate` against the untouched state
//! 2. [`apply_checked`] - `apply` then `post_validate`; the caller rolls back
//!    on failure

use crate::action::CommandTransition;
use crate::env::WorldRegistry;
use crate::state::GameState;

use super::errors::{TransitionPhase, TransitionPhaseError};

#[inline]
pub(super) fn validate<T>(
    transition: &T,
    state: &GameState,
    world: &WorldRegistry,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: CommandTransition,
{
    transition
        .pre_validate(state, world)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))
}

#[inline]
pub(super) fn apply_checked<T>(
    transition: &T,
    state: &mut GameState,
    world: &WorldRegistry,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: CommandTransition,
{
    let result = transition
        .apply(state, world)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, world)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}
