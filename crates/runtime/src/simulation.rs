//! Scripted playthroughs.
//!
//! A [`Simulation`] replays a fixed command list from a chosen start location
//! and records where the player went. It is the quickest way to check that a
//! world file supports an intended walkthrough.

use std::sync::Arc;

use game_core::{
    ArenaPlayer, CommandOutcome, EventRecord, GameConfig, GameEngine, LocationId, ScriptedPlayer,
    WorldRegistry,
};

use crate::error::{Result, RuntimeError};

/// What a completed simulation observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    pub outcomes: Vec<CommandOutcome>,
    pub events: Vec<EventRecord>,
}

impl SimulationReport {
    /// Location ids in visiting order, start included.
    pub fn id_log(&self) -> Vec<LocationId> {
        self.events.iter().map(|record| record.location).collect()
    }
}

pub struct Simulation {
    world: Arc<WorldRegistry>,
    config: GameConfig,
    commands: Vec<String>,
    player: Box<dyn ArenaPlayer>,
}

impl Simulation {
    pub fn new<I, S>(
        world: Arc<WorldRegistry>,
        config: GameConfig,
        start: LocationId,
        commands: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            world,
            config: config.with_start_location(start),
            commands: commands.into_iter().map(Into::into).collect(),
            player: Box::new(ScriptedPlayer::default()),
        }
    }

    /// Arena player consulted by gated takes. Defaults to one that quits.
    pub fn with_player(mut self, player: impl ArenaPlayer + 'static) -> Self {
        self.player = Box::new(player);
        self
    }

    /// Runs every command, stopping at the first one the engine rejects.
    pub fn run(mut self) -> Result<SimulationReport> {
        let mut engine = GameEngine::new(self.world, self.config)?;
        let mut outcomes = Vec::with_capacity(self.commands.len());

        for (step, command) in self.commands.into_iter().enumerate() {
            match engine.execute(&command, self.player.as_mut()) {
                Ok(outcome) => outcomes.push(outcome),
                Err(source) => {
                    tracing::warn!(step, %command, %source, "simulation stopped");
                    return Err(RuntimeError::Rejected {
                        step,
                        command,
                        source,
                    });
                }
            }
        }

        Ok(SimulationReport {
            outcomes,
            events: engine.state().history.iter().cloned().collect(),
        })
    }
}
