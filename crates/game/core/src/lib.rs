//! Deterministic text-adventure rules shared by every front end.
//!
//! `game-core` defines the canonical rules (commands, engine, world state,
//! arena mini-game) and exposes pure APIs that can be reused by the runtime
//! and by offline tools. All state mutation flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod arena;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

#[cfg(test)]
pub(crate) mod fixtures;

pub use action::{
    Command, CommandTransition, DropAction, DropError, MenuCommand, MoveAction, MoveError,
    TakeAction, TakeError,
};
pub use arena::{
    ArenaEngine, ArenaInputError, ArenaMove, ArenaOutcome, ArenaPlayer, ArenaResult, MoveType,
    Power, ScriptedPlayer,
};
pub use config::{ArenaConfig, GameConfig, GateRule};
pub use engine::{
    CommandOutcome, ExecuteError, GameEnd, GameEngine, TransitionPhase, TransitionPhaseError,
};
pub use env::{ItemDefinition, LocationDefinition, WorldError, WorldRegistry};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    EventHistory, EventRecord, EventTriple, GameState, GameStatus, GateFlag, ItemId, LocationId,
    Snapshot, SnapshotManager, WorldState,
};
