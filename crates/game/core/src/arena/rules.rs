//! Round resolution: affordability, dominance, scoring, regeneration.

use super::moves::ArenaMove;

/// Which competitor an arena fact refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human player.
    Challenger,
    /// The AI opponent.
    Opponent,
}

/// How a round was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerdictReason {
    /// Exactly one side's move beat the other.
    Dominance,
    /// No clean dominance; the higher power took the point.
    Power,
    /// No dominance and equal power.
    Tie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    pub winner: Option<Side>,
    pub reason: VerdictReason,
}

/// Decides a round between two played moves.
///
/// Both dominance predicates are evaluated; a point is awarded by dominance
/// only when exactly one holds. Otherwise power decides, and equal power is a
/// scoreless draw.
pub fn judge(challenger: ArenaMove, opponent: ArenaMove) -> Verdict {
    match (challenger.beats(opponent), opponent.beats(challenger)) {
        (true, false) => Verdict {
            winner: Some(Side::Challenger),
            reason: VerdictReason::Dominance,
        },
        (false, true) => Verdict {
            winner: Some(Side::Opponent),
            reason: VerdictReason::Dominance,
        },
        _ => {
            let winner = match challenger.power.cmp(&opponent.power) {
                std::cmp::Ordering::Greater => Some(Side::Challenger),
                std::cmp::Ordering::Less => Some(Side::Opponent),
                std::cmp::Ordering::Equal => None,
            };
            let reason = if winner.is_some() {
                VerdictReason::Power
            } else {
                VerdictReason::Tie
            };
            Verdict { winner, reason }
        }
    }
}

/// A move as requested versus as actually played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayedMove {
    pub requested: ArenaMove,
    pub played: ArenaMove,
    /// True when `requested` was unaffordable and `played` is the fallback.
    pub downgraded: bool,
}

impl PlayedMove {
    /// Checks affordability against `energy`, falling back to rock 1.
    pub fn settle(requested: ArenaMove, energy: u32) -> Self {
        if requested.affordable(energy) {
            Self {
                requested,
                played: requested,
                downgraded: false,
            }
        } else {
            Self {
                requested,
                played: ArenaMove::FALLBACK,
                downgraded: true,
            }
        }
    }
}

/// Energy and points of one side of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    pub energy: u32,
    pub points: u32,
}

impl Competitor {
    pub const WIN_REGEN: u32 = 1;
    pub const LOSS_REGEN: u32 = 2;
    pub const DRAW_REGEN: u32 = 1;

    pub const fn new(energy: u32) -> Self {
        Self { energy, points: 0 }
    }

    /// Deducts the move's cost; energy never drops below zero.
    pub fn pay(&mut self, played: ArenaMove) {
        self.energy = self.energy.saturating_sub(played.cost());
    }

    /// Applies the round result for this side: point and regeneration.
    pub fn settle_round(&mut self, side: Side, verdict: Verdict) {
        match verdict.winner {
            Some(winner) if winner == side => {
                self.points += 1;
                self.energy += Self::WIN_REGEN;
            }
            Some(_) => self.energy += Self::LOSS_REGEN,
            None => self.energy += Self::DRAW_REGEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::moves::{MoveType, Power};

    fn mv(kind: MoveType, level: u8) -> ArenaMove {
        ArenaMove::new(kind, Power::new(level).unwrap())
    }

    #[test]
    fn shadow_one_beats_rock_one_by_dominance() {
        let verdict = judge(mv(MoveType::Shadow, 1), mv(MoveType::Rock, 1));
        assert_eq!(verdict.winner, Some(Side::Challenger));
        assert_eq!(verdict.reason, VerdictReason::Dominance);
    }

    #[test]
    fn paper_three_beats_rock_one_by_dominance_not_power() {
        let verdict = judge(mv(MoveType::Paper, 3), mv(MoveType::Rock, 1));
        assert_eq!(verdict.winner, Some(Side::Challenger));
        assert_eq!(verdict.reason, VerdictReason::Dominance);

        let verdict = judge(mv(MoveType::Rock, 1), mv(MoveType::Paper, 3));
        assert_eq!(verdict.winner, Some(Side::Opponent));
        assert_eq!(verdict.reason, VerdictReason::Dominance);
    }

    #[test]
    fn low_power_dominance_beats_high_power() {
        let verdict = judge(mv(MoveType::Rock, 1), mv(MoveType::Scissors, 3));
        assert_eq!(verdict.winner, Some(Side::Challenger));
        assert_eq!(verdict.reason, VerdictReason::Dominance);
    }

    #[test]
    fn same_type_falls_back_to_power() {
        let verdict = judge(mv(MoveType::Rock, 2), mv(MoveType::Rock, 3));
        assert_eq!(verdict.winner, Some(Side::Opponent));
        assert_eq!(verdict.reason, VerdictReason::Power);

        let verdict = judge(mv(MoveType::Paper, 2), mv(MoveType::Paper, 2));
        assert_eq!(verdict.winner, None);
        assert_eq!(verdict.reason, VerdictReason::Tie);
    }

    #[test]
    fn mutual_shadow_dominance_is_treated_as_no_dominance() {
        let verdict = judge(mv(MoveType::Shadow, 1), mv(MoveType::Shadow, 1));
        assert_eq!(verdict.winner, None);
        assert_eq!(verdict.reason, VerdictReason::Tie);
    }

    #[test]
    fn shadow_against_higher_power_uses_power() {
        let verdict = judge(mv(MoveType::Shadow, 1), mv(MoveType::Rock, 2));
        assert_eq!(verdict.winner, Some(Side::Opponent));
        assert_eq!(verdict.reason, VerdictReason::Power);
    }

    #[test]
    fn unaffordable_move_downgrades_for_free() {
        let played = PlayedMove::settle(mv(MoveType::Shadow, 2), 2);
        assert!(played.downgraded);
        assert_eq!(played.played, ArenaMove::FALLBACK);
        assert_eq!(played.played.cost(), 0);

        let played = PlayedMove::settle(mv(MoveType::Scissors, 3), 2);
        assert!(!played.downgraded);
        assert_eq!(played.played, played.requested);
    }

    #[test]
    fn regeneration_by_result() {
        let win = Verdict {
            winner: Some(Side::Challenger),
            reason: VerdictReason::Dominance,
        };
        let mut challenger = Competitor::new(0);
        let mut opponent = Competitor::new(0);
        challenger.settle_round(Side::Challenger, win);
        opponent.settle_round(Side::Opponent, win);
        assert_eq!((challenger.points, challenger.energy), (1, 1));
        assert_eq!((opponent.points, opponent.energy), (0, 2));

        let draw = Verdict {
            winner: None,
            reason: VerdictReason::Tie,
        };
        challenger.settle_round(Side::Challenger, draw);
        assert_eq!((challenger.points, challenger.energy), (1, 2));
    }
}
