//! Interactive playthrough bootstrap.

use std::sync::Arc;

use game_content::ContentFactory;
use game_core::{
    ArenaPlayer, CommandOutcome, ExecuteError, GameConfig, GameEngine, MenuCommand, WorldRegistry,
};
use strum::IntoEnumIterator;

use crate::config::RuntimeConfig;
use crate::error::Result;

/// One playthrough: a loaded world, the engine, and prompt helpers for a
/// front end.
pub struct Session {
    engine: GameEngine,
}

impl Session {
    /// Loads content from `config.data_dir` and applies the overrides.
    pub fn open(config: &RuntimeConfig) -> Result<Self> {
        let factory = ContentFactory::new(config.data_dir.clone());
        let world = factory.load_world()?;
        let game = config.apply(factory.load_config()?);
        tracing::info!(data_dir = %config.data_dir.display(), "session content loaded");
        Self::from_parts(Arc::new(world), game)
    }

    pub fn from_parts(world: Arc<WorldRegistry>, game: GameConfig) -> Result<Self> {
        let engine = GameEngine::new(world, game)?;
        Ok(Self { engine })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    /// Text to show on arrival: long on the first visit, brief afterwards.
    pub fn describe(&mut self) -> std::result::Result<String, ExecuteError> {
        self.engine.describe(false)
    }

    /// Menu words followed by the current location's exits.
    pub fn options(&self) -> Vec<String> {
        let mut options: Vec<String> = MenuCommand::iter().map(|m| m.to_string()).collect();
        if let Ok(here) = self
            .engine
            .world()
            .location(self.engine.state().current_location)
        {
            options.extend(here.commands.keys().cloned());
        }
        options
    }

    /// Runs one command line.
    pub fn handle(
        &mut self,
        line: &str,
        player: &mut dyn ArenaPlayer,
    ) -> std::result::Result<CommandOutcome, ExecuteError> {
        let outcome = self.engine.execute(line, player);
        if let Err(err) = &outcome {
            tracing::debug!(%err, line, "command rejected");
        }
        outcome
    }
}
