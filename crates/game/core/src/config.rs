use crate::env::fold_name;
use crate::state::{GateFlag, LocationId};

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of mutating actions before the game is lost.
    pub max_moves: u32,
    /// Location the player starts in (and returns to on restart).
    pub start_location: LocationId,
    /// Flat score granted for every successful take.
    pub take_reward: u32,
    /// Items that can only be taken after winning a mini-game.
    pub gates: Vec<GateRule>,
    pub arena: ArenaConfig,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_MOVES: u32 = 30;
    pub const DEFAULT_START_LOCATION: LocationId = LocationId(1);
    pub const DEFAULT_TAKE_REWARD: u32 = 1;

    pub fn new() -> Self {
        Self {
            max_moves: Self::DEFAULT_MAX_MOVES,
            start_location: Self::DEFAULT_START_LOCATION,
            take_reward: Self::DEFAULT_TAKE_REWARD,
            gates: Vec::new(),
            arena: ArenaConfig::default(),
        }
    }

    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn with_start_location(mut self, start_location: LocationId) -> Self {
        self.start_location = start_location;
        self
    }

    pub fn with_gate(mut self, rule: GateRule) -> Self {
        self.gates.push(rule);
        self
    }

    /// Returns the gate guarding `item` at `location`, if any.
    ///
    /// Item names compare case-insensitively.
    pub fn gate_for(&self, location: LocationId, item: &str) -> Option<&GateRule> {
        let item = fold_name(item);
        self.gates
            .iter()
            .find(|rule| rule.location == location && fold_name(&rule.item) == item)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Declarative `(location, item) -> flag` entry.
///
/// Taking `item` while standing in `location` requires an arena win unless
/// `flag` is already set in the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateRule {
    pub location: LocationId,
    pub item: String,
    pub flag: GateFlag,
}

impl GateRule {
    pub fn new(location: LocationId, item: impl Into<String>, flag: impl Into<GateFlag>) -> Self {
        Self {
            location,
            item: item.into(),
            flag: flag.into(),
        }
    }
}

/// Tunables for the arena mini-game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Energy each competitor starts a battle with.
    pub starting_energy: u32,
    /// Points needed to win a battle.
    pub target_points: u32,
    /// Chance (0..=100) that the opponent ambushes a low-energy challenger.
    pub ambush_percent: u32,
    /// Seed for the opponent's random source.
    pub seed: u64,
}

impl ArenaConfig {
    pub const DEFAULT_STARTING_ENERGY: u32 = 3;
    pub const DEFAULT_TARGET_POINTS: u32 = 5;
    pub const DEFAULT_AMBUSH_PERCENT: u32 = 35;
    pub const DEFAULT_SEED: u64 = 0x5eed_a4e7a;

    pub fn new() -> Self {
        Self {
            starting_energy: Self::DEFAULT_STARTING_ENERGY,
            target_points: Self::DEFAULT_TARGET_POINTS,
            ambush_percent: Self::DEFAULT_AMBUSH_PERCENT,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
