//! Error types for the command execution pipeline.

use crate::action::{CommandTransition, DropAction, MoveAction, TakeAction};
use crate::env::WorldError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameStatus;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.phase {
            // Pre-validation failures are plain input problems.
            TransitionPhase::PreValidate => write!(f, "{}", self.error),
            phase => write!(f, "{} failed: {}", phase.as_str(), self.error),
        }
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

impl<E: GameError> TransitionPhaseError<E> {
    fn severity(&self) -> ErrorSeverity {
        match self.phase {
            TransitionPhase::PreValidate => self.error.severity(),
            // Anything past validation means the state machine is inconsistent.
            TransitionPhase::Apply | TransitionPhase::PostValidate => ErrorSeverity::Internal,
        }
    }
}

/// Errors surfaced while executing a command through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("{0}")]
    Move(TransitionPhaseError<<MoveAction as CommandTransition>::Error>),

    #[error("{0}")]
    Take(TransitionPhaseError<<TakeAction as CommandTransition>::Error>),

    #[error("{0}")]
    Drop(TransitionPhaseError<<DropAction as CommandTransition>::Error>),

    #[error("please enter a command")]
    EmptyInput,

    #[error("that was an invalid option: '{0}'")]
    UnknownCommand(String),

    #[error("{verb} what?")]
    BlankArgument { verb: &'static str },

    #[error("the game is over ({status:?}); you can only undo or restart")]
    GameOver { status: GameStatus },

    #[error(transparent)]
    World(#[from] WorldError),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Move(err) => err.severity(),
            Self::Take(err) => err.severity(),
            Self::Drop(err) => err.severity(),
            Self::EmptyInput | Self::UnknownCommand(_) | Self::BlankArgument { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::GameOver { .. } => ErrorSeverity::Validation,
            Self::World(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Move(err) => err.error.error_code(),
            Self::Take(err) => err.error.error_code(),
            Self::Drop(err) => err.error.error_code(),
            Self::EmptyInput => "EXECUTE_EMPTY_INPUT",
            Self::UnknownCommand(_) => "EXECUTE_UNKNOWN_COMMAND",
            Self::BlankArgument { .. } => "EXECUTE_BLANK_ARGUMENT",
            Self::GameOver { .. } => "EXECUTE_GAME_OVER",
            Self::World(err) => err.error_code(),
        }
    }
}
