//! Challenger input: prompt grammar and the player seam.

use std::collections::VecDeque;

use thiserror::Error;

use super::engine::{ArenaResult, RoundReport};
use super::moves::{ArenaMove, MoveType, Power};
use super::rules::Competitor;
use crate::error::{ErrorSeverity, GameError};

/// Rules text shown on request.
pub const RULES: &str = "\
Arena rules:
  Moves are rock, paper, scissors or shadow, at power 1, 2 or 3 (e.g. `paper 2`).
  Power 1 is free, power 2 costs 1 energy, power 3 costs 2. Shadow costs 2 extra.
  Rock beats scissors, scissors beats paper, paper beats rock.
  Shadow beats any power-1 move. Otherwise the higher power scores.
  If you cannot afford your move you play rock 1 instead.
  Winner regains 1 energy, loser 2, a draw gives both 1.
  First to the target points wins. Type `quit` to give up.";

/// A parsed challenger token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaInput {
    Move(ArenaMove),
    Rules,
    Quit,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArenaInputError {
    #[error("enter a move such as `rock 2`")]
    Empty,

    #[error("`{0}` is not a move type (rock, paper, scissors, shadow)")]
    UnknownType(String),

    #[error("`{0}` is not a power level (1, 2 or 3)")]
    BadPower(String),
}

impl GameError for ArenaInputError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ARENA_INPUT_EMPTY",
            Self::UnknownType(_) => "ARENA_INPUT_UNKNOWN_TYPE",
            Self::BadPower(_) => "ARENA_INPUT_BAD_POWER",
        }
    }
}

/// Parses `<type>[ ]?[1-3]?`, `rules`/`help`/`?` and `quit`.
///
/// Power defaults to 1 when omitted.
pub fn parse_input(raw: &str) -> Result<ArenaInput, ArenaInputError> {
    let token = raw.trim().to_lowercase();
    match token.as_str() {
        "" => return Err(ArenaInputError::Empty),
        "rules" | "help" | "?" => return Ok(ArenaInput::Rules),
        "quit" => return Ok(ArenaInput::Quit),
        _ => {}
    }

    let split = token
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(token.len());
    let (name, rest) = token.split_at(split);
    let kind: MoveType = name
        .parse()
        .map_err(|_| ArenaInputError::UnknownType(name.to_string()))?;

    let rest = rest.trim_start();
    let power = if rest.is_empty() {
        Power::ONE
    } else {
        rest.parse::<u8>()
            .ok()
            .and_then(Power::new)
            .ok_or_else(|| ArenaInputError::BadPower(rest.to_string()))?
    };

    Ok(ArenaInput::Move(ArenaMove::new(kind, power)))
}

/// Battle state visible at the round-start prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaStatus {
    pub round: u32,
    pub target_points: u32,
    pub challenger: Competitor,
    pub opponent: Competitor,
}

/// Feedback the engine sends to the player between prompts.
#[derive(Clone, Debug, PartialEq)]
pub enum ArenaEvent<'a> {
    Rules(&'static str),
    InvalidInput(&'a ArenaInputError),
    Round(&'a RoundReport),
}

/// The human side of a battle.
///
/// The engine blocks on [`ArenaPlayer::next_input`] at the start of every
/// round; returning `None` means the input source is exhausted and is treated
/// as quitting.
pub trait ArenaPlayer {
    fn next_input(&mut self, status: &ArenaStatus) -> Option<String>;

    fn notify(&mut self, _event: &ArenaEvent<'_>) {}

    /// Asked after a lost battle. `true` starts a fresh battle.
    fn rematch(&mut self, _result: &ArenaResult) -> bool {
        false
    }
}

/// Plays a fixed list of tokens and rematch answers.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    inputs: VecDeque<String>,
    rematches: VecDeque<bool>,
    notices: Vec<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_rematches(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.rematches = answers.into_iter().collect();
        self
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Rules and invalid-input notices received, in order.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl ArenaPlayer for ScriptedPlayer {
    fn next_input(&mut self, _status: &ArenaStatus) -> Option<String> {
        self.inputs.pop_front()
    }

    fn notify(&mut self, event: &ArenaEvent<'_>) {
        match event {
            ArenaEvent::Rules(text) => self.notices.push((*text).to_string()),
            ArenaEvent::InvalidInput(err) => self.notices.push(err.to_string()),
            ArenaEvent::Round(_) => {}
        }
    }

    fn rematch(&mut self, _result: &ArenaResult) -> bool {
        self.rematches.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(kind: MoveType, level: u8) -> ArenaInput {
        ArenaInput::Move(ArenaMove::new(kind, Power::new(level).unwrap()))
    }

    #[test]
    fn parses_moves_with_and_without_space() {
        assert_eq!(parse_input("rock 2"), Ok(mv(MoveType::Rock, 2)));
        assert_eq!(parse_input("Paper3"), Ok(mv(MoveType::Paper, 3)));
        assert_eq!(parse_input("  scissors "), Ok(mv(MoveType::Scissors, 1)));
        assert_eq!(parse_input("SHADOW 1"), Ok(mv(MoveType::Shadow, 1)));
    }

    #[test]
    fn parses_control_words() {
        for word in ["rules", "help", "?", " HELP "] {
            assert_eq!(parse_input(word), Ok(ArenaInput::Rules));
        }
        assert_eq!(parse_input("quit"), Ok(ArenaInput::Quit));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(parse_input("   "), Err(ArenaInputError::Empty));
        assert_eq!(
            parse_input("lizard 2"),
            Err(ArenaInputError::UnknownType("lizard".into()))
        );
        assert_eq!(
            parse_input("rock 4"),
            Err(ArenaInputError::BadPower("4".into()))
        );
        assert_eq!(
            parse_input("rock two"),
            Err(ArenaInputError::BadPower("two".into()))
        );
        assert!(parse_input("42").is_err());
        assert_eq!(
            ArenaInputError::Empty.severity(),
            ErrorSeverity::Recoverable
        );
    }

    #[test]
    fn scripted_player_drains_in_order() {
        let status = ArenaStatus {
            round: 1,
            target_points: 5,
            challenger: Competitor::new(3),
            opponent: Competitor::new(3),
        };
        let mut player = ScriptedPlayer::new(["rock", "quit"]);
        assert_eq!(player.next_input(&status).as_deref(), Some("rock"));
        assert_eq!(player.remaining(), 1);
        assert_eq!(player.next_input(&status).as_deref(), Some("quit"));
        assert_eq!(player.next_input(&status), None);
    }
}
