//! Command dispatch and the game state machine.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! mutating command follows the same path:
//!
//! validate → (gate) → checkpoint → apply → post-validate → advance moves →
//! evaluate end
//!
//! A failure after the checkpoint rolls the state back, so callers only ever
//! observe the state before or after a complete command.

mod errors;
mod outcome;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use outcome::{CommandOutcome, GameEnd};

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::{
    Command, CommandTransition, DropAction, MenuCommand, MoveAction, TakeAction,
};
use crate::arena::{ArenaEngine, ArenaPlayer};
use crate::config::GameConfig;
use crate::env::{ItemDefinition, WorldError, WorldRegistry};
use crate::state::{GameState, GameStatus, Snapshot, SnapshotManager};

/// Owns one playthrough: state, undo checkpoints and the arena random source.
///
/// The world registry is shared read-only; everything else is exclusively
/// owned and only mutated through the methods below.
pub struct GameEngine<R: Rng = ChaCha8Rng> {
    world: Arc<WorldRegistry>,
    config: GameConfig,
    state: GameState,
    snapshots: SnapshotManager,
    rng: R,
}

impl GameEngine<ChaCha8Rng> {
    /// Creates an engine whose arena draws from `config.arena.seed`.
    ///
    /// # Errors
    ///
    /// Returns `WorldError::LocationNotFound` if the start location is missing.
    pub fn new(world: Arc<WorldRegistry>, config: GameConfig) -> Result<Self, WorldError> {
        let rng = ChaCha8Rng::seed_from_u64(config.arena.seed);
        Self::with_rng(world, config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(
        world: Arc<WorldRegistry>,
        config: GameConfig,
        rng: R,
    ) -> Result<Self, WorldError> {
        let state = GameState::new(&world, &config)?;
        let snapshots = SnapshotManager::new(Snapshot::capture(&state));
        tracing::debug!(
            start = %state.current_location,
            max_moves = state.max_moves,
            "game engine ready"
        );
        Ok(Self {
            world,
            config,
            state,
            snapshots,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn world(&self) -> &WorldRegistry {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of checkpoints available to [`GameEngine::undo`].
    pub fn undo_depth(&self) -> usize {
        self.snapshots.depth()
    }

    pub fn is_over(&self) -> bool {
        !self.state.is_ongoing()
    }

    /// Parses and runs one command line.
    ///
    /// `player` is only consulted when a take triggers an arena battle.
    pub fn execute(
        &mut self,
        line: &str,
        player: &mut dyn ArenaPlayer,
    ) -> Result<CommandOutcome, ExecuteError> {
        let command = Command::parse(line).ok_or(ExecuteError::EmptyInput)?;
        tracing::debug!(?command, "dispatching command");

        match command {
            Command::Menu(MenuCommand::Look) => {
                Ok(CommandOutcome::Description(self.describe(true)?))
            }
            Command::Menu(MenuCommand::Inventory) => {
                Ok(CommandOutcome::Inventory(self.inventory_names()))
            }
            Command::Menu(MenuCommand::Score) => Ok(CommandOutcome::Score {
                score: self.state.score,
                moves_used: self.state.moves_used,
                max_moves: self.state.max_moves,
            }),
            Command::Menu(MenuCommand::Log) => Ok(CommandOutcome::Log(
                self.state.history.iter().cloned().collect(),
            )),
            Command::Menu(MenuCommand::Undo) => Ok(self.undo()),
            Command::Menu(MenuCommand::Restart) => self.restart(),
            Command::Menu(MenuCommand::Quit) => self.quit(),
            Command::Go(direction) => {
                if direction.is_empty() {
                    return Err(ExecuteError::BlankArgument { verb: "go" });
                }
                self.move_to(&format!("go {direction}"))
            }
            Command::Take(item) => self.take(&item, player),
            Command::Drop(item) => self.drop(&item),
            Command::Exit(raw) => {
                let here = self.world.location(self.state.current_location)?;
                if here.destination(&raw).is_none() {
                    return Err(ExecuteError::UnknownCommand(raw));
                }
                self.move_to(&raw)
            }
        }
    }

    /// Follows an exit of the current location.
    pub fn move_to(&mut self, command: &str) -> Result<CommandOutcome, ExecuteError> {
        self.ensure_ongoing()?;
        let action = MoveAction::new(command);
        transition::validate(&action, &self.state, &self.world).map_err(ExecuteError::Move)?;

        let moved = self.commit(&action).map_err(ExecuteError::Move)?;
        let end = self.evaluate_end();
        Ok(CommandOutcome::Moved {
            location: moved.destination,
            description: moved.description,
            end,
        })
    }

    /// Picks up `name` from the current location, fighting for it first if a
    /// gate guards it.
    ///
    /// A quit or lost battle leaves the state untouched and returns
    /// [`CommandOutcome::TakeAborted`]. A won battle opens the gate for the
    /// rest of the playthrough, undo included; only restart closes it again.
    pub fn take(
        &mut self,
        name: &str,
        player: &mut dyn ArenaPlayer,
    ) -> Result<CommandOutcome, ExecuteError> {
        self.ensure_ongoing()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ExecuteError::BlankArgument { verb: "take" });
        }
        let action = TakeAction::new(name, self.config.take_reward);
        transition::validate(&action, &self.state, &self.world).map_err(ExecuteError::Take)?;

        let gate = self
            .config
            .gate_for(self.state.current_location, name)
            .map(|rule| rule.flag.clone())
            .filter(|flag| !self.state.gate_open(flag));
        if let Some(flag) = gate {
            tracing::info!(%flag, item = name, "gate closed; starting arena battle");
            let result = ArenaEngine::new(&self.config.arena, &mut self.rng).play(player);
            if !result.challenger_won() {
                tracing::warn!(%flag, outcome = ?result.outcome, "gated take aborted");
                return Ok(CommandOutcome::TakeAborted {
                    item: name.to_string(),
                    arena: result.outcome,
                });
            }
            tracing::info!(%flag, "gate opened");
            self.state.gates.insert(flag);
        }

        let id = self.commit(&action).map_err(ExecuteError::Take)?;
        let end = self.evaluate_end();
        Ok(CommandOutcome::Taken {
            item: self.world.item_name(id),
            end,
        })
    }

    /// Puts a held item down; scores its target points at its target location.
    pub fn drop(&mut self, name: &str) -> Result<CommandOutcome, ExecuteError> {
        self.ensure_ongoing()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ExecuteError::BlankArgument { verb: "drop" });
        }
        let action = DropAction::new(name);
        transition::validate(&action, &self.state, &self.world).map_err(ExecuteError::Drop)?;

        let dropped = self.commit(&action).map_err(ExecuteError::Drop)?;
        let end = self.evaluate_end();
        Ok(CommandOutcome::Dropped {
            item: dropped.name,
            points: dropped.points,
            end,
        })
    }

    /// Restores the last checkpoint. Allowed in any status.
    pub fn undo(&mut self) -> CommandOutcome {
        if self.snapshots.undo(&mut self.state) {
            tracing::debug!(depth = self.snapshots.depth(), "undo");
            CommandOutcome::Undone
        } else {
            CommandOutcome::NothingToUndo
        }
    }

    /// Rewinds to the construction state and empties the undo stack.
    pub fn restart(&mut self) -> Result<CommandOutcome, ExecuteError> {
        self.snapshots.restart(&mut self.state);
        tracing::info!("game restarted");
        let start = self.world.location(self.state.current_location)?;
        Ok(CommandOutcome::Restarted {
            description: start.long_description.clone(),
        })
    }

    /// Ends the playthrough. Can be undone.
    pub fn quit(&mut self) -> Result<CommandOutcome, ExecuteError> {
        self.ensure_ongoing()?;
        self.snapshots.push(Snapshot::capture(&self.state));
        self.state.status = GameStatus::Quit;
        tracing::info!(score = self.state.score, "player quit");
        Ok(CommandOutcome::Quit)
    }

    /// Text of the current location.
    ///
    /// Long on the first visit or when `force_long`; marks the location
    /// visited either way.
    pub fn describe(&mut self, force_long: bool) -> Result<String, ExecuteError> {
        let here = self.world.location(self.state.current_location)?;
        let first_visit = self.state.world.mark_visited(here.id);
        Ok(here.description(first_visit || force_long).to_string())
    }

    /// Every catalog item that is held or not lying at its target.
    pub fn undelivered_items(&self) -> Vec<&ItemDefinition> {
        self.world
            .items()
            .filter(|(id, item)| {
                self.state.holds(*id) || !self.state.world.contains(item.target_location, *id)
            })
            .map(|(_, item)| item)
            .collect()
    }

    pub fn inventory_names(&self) -> Vec<String> {
        self.state
            .inventory
            .iter()
            .map(|id| self.world.item_name(*id))
            .collect()
    }

    fn ensure_ongoing(&self) -> Result<(), ExecuteError> {
        if self.state.is_ongoing() {
            Ok(())
        } else {
            Err(ExecuteError::GameOver {
                status: self.state.status,
            })
        }
    }

    /// Checkpoints, applies, and advances the move counter. Rolls back to the
    /// checkpoint if apply or post-validation fails.
    fn commit<T>(
        &mut self,
        action: &T,
    ) -> Result<T::Result, TransitionPhaseError<T::Error>>
    where
        T: CommandTransition,
        T::Error: std::fmt::Display,
    {
        let checkpoint = Snapshot::capture(&self.state);
        match transition::apply_checked(action, &mut self.state, &self.world) {
            Ok(result) => {
                self.snapshots.push(checkpoint);
                self.state.moves_used += 1;
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(phase = err.phase.as_str(), error = %err.error, "rolling back");
                checkpoint.restore(&mut self.state);
                Err(err)
            }
        }
    }

    /// Loss is checked before win.
    fn evaluate_end(&mut self) -> Option<GameEnd> {
        let end = if self.state.moves_used >= self.state.max_moves {
            self.state.status = GameStatus::Lost;
            GameEnd::Lost {
                moves_used: self.state.moves_used,
                max_moves: self.state.max_moves,
            }
        } else if self.undelivered_items().is_empty() {
            self.state.status = GameStatus::Won;
            GameEnd::Won
        } else {
            return None;
        };
        tracing::info!(?end, score = self.state.score, "game over");
        Some(end)
    }
}
