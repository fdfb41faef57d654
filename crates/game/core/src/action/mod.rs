//! Action domain: player commands and the transitions that apply them.
//!
//! # Module Structure
//!
//! - `command`: parsed command lines (`Command`, `MenuCommand`)
//! - `transition`: the three-phase `CommandTransition` contract
//! - `movement`, `take`, `drop`: the mutating commands and their errors

pub mod command;
pub mod drop;
pub mod movement;
pub mod take;
pub mod transition;

pub use command::{Command, MenuCommand};
pub use drop::{DropAction, DropError, DropResult};
pub use movement::{MoveAction, MoveError, MoveResult};
pub use take::{TakeAction, TakeError};
pub use transition::CommandTransition;
