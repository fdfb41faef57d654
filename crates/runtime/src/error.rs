//! Unified error type surfaced by the runtime.
//!
//! Wraps content loading failures and engine rejections so callers can bubble
//! them up with consistent context.
use game_core::{ExecuteError, WorldError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("failed to start the game")]
    World(#[from] WorldError),

    #[error("command {step} ('{command}') was rejected")]
    Rejected {
        step: usize,
        command: String,
        #[source]
        source: ExecuteError,
    },
}
