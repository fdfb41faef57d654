//! Player command vocabulary.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Built-in words that take no argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuCommand {
    Look,
    Inventory,
    Score,
    Log,
    Undo,
    Restart,
    Quit,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Menu(MenuCommand),
    /// `go <direction>`; the argument may be blank.
    Go(String),
    /// `take <item>`; the argument may be blank.
    Take(String),
    /// `drop <item>`; the argument may be blank.
    Drop(String),
    /// Anything else, looked up in the current location's command table.
    Exit(String),
}

impl Command {
    /// Normalises and classifies a command line.
    ///
    /// Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            return None;
        }
        if let Ok(menu) = line.parse::<MenuCommand>() {
            return Some(Self::Menu(menu));
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line.as_str(), ""),
        };
        let command = match verb {
            "go" => Self::Go(rest.to_string()),
            "take" => Self::Take(rest.to_string()),
            "drop" => Self::Drop(rest.to_string()),
            _ => Self::Exit(line.clone()),
        };
        Some(command)
    }
}
