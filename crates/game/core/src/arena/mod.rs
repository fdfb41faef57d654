//! Arena battle mini-game.
//!
//! A self-contained rule engine that gates access to puzzle items. The game
//! engine runs it synchronously and only inspects the final
//! [`ArenaResult`]; nothing in [`crate::state`] is touched while a battle is
//! in progress.
mod engine;
mod input;
mod moves;
mod opponent;
mod rules;

pub use engine::{ArenaEngine, ArenaOutcome, ArenaResult, Battle, RoundReport};
pub use input::{
    ArenaEvent, ArenaInput, ArenaInputError, ArenaPlayer, ArenaStatus, RULES, ScriptedPlayer,
    parse_input,
};
pub use moves::{ArenaMove, MoveType, Power};
pub use opponent::{Intent, Opponent, OpponentView};
pub use rules::{Competitor, PlayedMove, Side, Verdict, VerdictReason, judge};
