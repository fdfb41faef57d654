//! Typed command results and their player-facing messages.

use std::fmt;

use crate::arena::ArenaOutcome;
use crate::state::{EventRecord, LocationId};

/// Why a playthrough ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEnd {
    Won,
    Lost { moves_used: u32, max_moves: u32 },
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnd::Won => {
                write!(f, "You returned all the missing items. CONGRATULATIONS! YOU WIN :))")
            }
            GameEnd::Lost {
                moves_used,
                max_moves,
            } => write!(
                f,
                "You ran out of moves. YOU LOSE :(( (moves: {moves_used}/{max_moves})"
            ),
        }
    }
}

/// Result of a successfully executed command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandOutcome {
    Moved {
        location: LocationId,
        description: String,
        end: Option<GameEnd>,
    },
    Taken {
        item: String,
        end: Option<GameEnd>,
    },
    /// A gate battle was quit or lost; nothing changed.
    TakeAborted {
        item: String,
        arena: ArenaOutcome,
    },
    Dropped {
        item: String,
        points: u32,
        end: Option<GameEnd>,
    },
    Description(String),
    Inventory(Vec<String>),
    Score {
        score: u32,
        moves_used: u32,
        max_moves: u32,
    },
    Log(Vec<EventRecord>),
    Undone,
    NothingToUndo,
    Restarted {
        description: String,
    },
    Quit,
}

impl CommandOutcome {
    /// The end reached by this command, if any.
    pub fn end(&self) -> Option<GameEnd> {
        match self {
            Self::Moved { end, .. } | Self::Taken { end, .. } | Self::Dropped { end, .. } => *end,
            _ => None,
        }
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved {
                description, end, ..
            } => {
                write!(f, "{description}")?;
                if let Some(end) = end {
                    write!(f, "\n{end}")?;
                }
                Ok(())
            }
            Self::Taken { end: Some(end), .. } | Self::Dropped { end: Some(end), .. } => {
                write!(f, "{end}")
            }
            Self::Taken { .. } => write!(f, "Taken"),
            Self::Dropped { item, .. } => write!(f, "You dropped: {item}"),
            Self::TakeAborted { item, arena } => match arena {
                ArenaOutcome::Quit => {
                    write!(f, "You walked away from the arena without the {item}.")
                }
                _ => write!(f, "You lost the battle. The {item} stays where it is."),
            },
            Self::Description(text) => write!(f, "{text}"),
            Self::Inventory(items) if items.is_empty() => write!(f, "Inventory: (empty)"),
            Self::Inventory(items) => write!(f, "Inventory: {}", items.join(", ")),
            Self::Score {
                score,
                moves_used,
                max_moves,
            } => write!(f, "Score: {score} | Moves: {moves_used}/{max_moves}"),
            Self::Log(records) => {
                for (index, record) in records.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "Location: {}, Description: {}",
                        record.location, record.description
                    )?;
                    if let Some(command) = &record.next_command {
                        write!(f, ", Next command: {command}")?;
                    }
                }
                Ok(())
            }
            Self::Undone => write!(f, "Undone."),
            Self::NothingToUndo => write!(f, "Nothing to undo."),
            Self::Restarted { description } => write!(f, "Game restarted.\n{description}"),
            Self::Quit => write!(f, "You quit the game."),
        }
    }
}
