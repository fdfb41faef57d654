//! Small worlds and players shared by unit tests.

use crate::arena::{ArenaEvent, ArenaPlayer, ArenaStatus, MoveType};
use crate::config::{GameConfig, GateRule};
use crate::env::{ItemDefinition, LocationDefinition, WorldRegistry};
use crate::state::LocationId;

/// Three rooms in a line, one item each, every item belonging elsewhere.
///
/// ```text
/// 3 (pen)
/// |
/// 2 (book) - 1 (mug)
/// ```
/// Targets: mug -> 3 (5 points), book -> 1 (3 points), pen -> 2 (2 points).
pub(crate) fn three_rooms() -> (WorldRegistry, GameConfig) {
    let locations = vec![
        LocationDefinition::new(LocationId(1), "Hall.", "A long hall with a mug on a bench.")
            .with_exit("go east", LocationId(2))
            .with_item("mug"),
        LocationDefinition::new(LocationId(2), "Library.", "Quiet shelves; a book lies open.")
            .with_exit("go west", LocationId(1))
            .with_exit("go north", LocationId(3))
            .with_item("book"),
        LocationDefinition::new(LocationId(3), "Tower.", "A windy tower room. A pen rolls about.")
            .with_exit("go south", LocationId(2))
            .with_item("pen"),
    ];
    let items = vec![
        ItemDefinition::new("mug", LocationId(1), LocationId(3), 5),
        ItemDefinition::new("book", LocationId(2), LocationId(1), 3),
        ItemDefinition::new("pen", LocationId(3), LocationId(2), 2),
    ];
    let registry = WorldRegistry::new(locations, items).expect("fixture world is valid");
    (registry, GameConfig::default())
}

/// [`three_rooms`] with the pen guarded by an arena battle.
pub(crate) fn gated() -> (WorldRegistry, GameConfig) {
    let (registry, config) = three_rooms();
    let config = config.with_gate(GateRule::new(LocationId(3), "pen", "tower-duel"));
    (registry, config)
}

/// Always plays the type that beats the opponent's counter to its own
/// previous move, at power 1. Wins every round after the first.
pub(crate) struct Outguesser {
    next: MoveType,
}

impl Outguesser {
    pub(crate) fn new() -> Self {
        Self {
            next: MoveType::Rock,
        }
    }
}

impl ArenaPlayer for Outguesser {
    fn next_input(&mut self, _status: &ArenaStatus) -> Option<String> {
        Some(self.next.to_string())
    }

    fn notify(&mut self, event: &ArenaEvent<'_>) {
        if let ArenaEvent::Round(report) = event {
            let counter = report.challenger.played.kind.countered_by();
            if let Some(next) = counter.and_then(MoveType::countered_by) {
                self.next = next;
            }
        }
    }
}
