//! Move vocabulary of the arena: types, power levels, costs.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The four move shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveType {
    Rock,
    Paper,
    Scissors,
    Shadow,
}

impl MoveType {
    /// Types that take part in the rock-paper-scissors cycle.
    pub const CLASSIC: [MoveType; 3] = [MoveType::Rock, MoveType::Paper, MoveType::Scissors];

    /// Flat cost added on top of the power cost.
    pub const SHADOW_SURCHARGE: u32 = 2;

    /// The type this one beats in the cycle. Shadow has none.
    pub const fn dominates(self) -> Option<MoveType> {
        match self {
            MoveType::Rock => Some(MoveType::Scissors),
            MoveType::Scissors => Some(MoveType::Paper),
            MoveType::Paper => Some(MoveType::Rock),
            MoveType::Shadow => None,
        }
    }

    /// The classic type that beats this one. Shadow has none.
    pub const fn countered_by(self) -> Option<MoveType> {
        match self {
            MoveType::Rock => Some(MoveType::Paper),
            MoveType::Paper => Some(MoveType::Scissors),
            MoveType::Scissors => Some(MoveType::Rock),
            MoveType::Shadow => None,
        }
    }

    pub const fn surcharge(self) -> u32 {
        match self {
            MoveType::Shadow => Self::SHADOW_SURCHARGE,
            _ => 0,
        }
    }
}

/// Power level of a move, 1 through 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Power(u8);

impl Power {
    pub const ONE: Power = Power(1);
    pub const TWO: Power = Power(2);
    pub const THREE: Power = Power(3);

    /// Returns `None` outside 1..=3.
    pub const fn new(level: u8) -> Option<Self> {
        match level {
            1..=3 => Some(Self(level)),
            _ => None,
        }
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    /// Energy cost of the power level alone.
    pub const fn cost(self) -> u32 {
        (self.0 - 1) as u32
    }

    /// Next lower level, if any.
    pub const fn lower(self) -> Option<Power> {
        Self::new(self.0 - 1)
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A type at a power level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaMove {
    pub kind: MoveType,
    pub power: Power,
}

impl ArenaMove {
    /// Free fallback played when a competitor cannot pay for their choice.
    pub const FALLBACK: ArenaMove = ArenaMove::new(MoveType::Rock, Power::ONE);
    /// Opponent's cheap trap against an exhausted challenger.
    pub const AMBUSH: ArenaMove = ArenaMove::new(MoveType::Shadow, Power::ONE);

    pub const fn new(kind: MoveType, power: Power) -> Self {
        Self { kind, power }
    }

    /// Energy needed: power cost plus the shadow surcharge.
    pub const fn cost(self) -> u32 {
        self.power.cost() + self.kind.surcharge()
    }

    pub const fn affordable(self, energy: u32) -> bool {
        self.cost() <= energy
    }

    /// Whether this move beats `other` outright, before any power comparison.
    ///
    /// Shadow only beats power-1 moves (of any type, shadow included); the
    /// classic types follow the rock > scissors > paper > rock cycle.
    pub fn beats(self, other: ArenaMove) -> bool {
        match self.kind {
            MoveType::Shadow => other.power == Power::ONE,
            kind => kind.dominates() == Some(other.kind),
        }
    }
}

impl std::fmt::Display for ArenaMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.power)
    }
}
