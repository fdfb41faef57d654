//! Runtime glue for the text adventure.
//!
//! This crate wires content loading, configuration overrides and logging
//! around a [`game_core::GameEngine`]:
//! - [`config`] reads environment overrides
//! - [`logging`] installs the tracing subscriber
//! - [`session`] hosts an interactive playthrough
//! - [`simulation`] replays scripted command lists
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod simulation;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use logging::init_tracing;
pub use session::Session;
pub use simulation::{Simulation, SimulationReport};
