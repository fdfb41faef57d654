//! Heuristic AI opponent.
//!
//! Decisions are made in layers, mirroring how a cautious player thinks:
//!
//! 1. **Intent**: ambush an exhausted challenger, counter their last move, or
//!    improvise
//! 2. **Type**: the move type that realises the intent
//! 3. **Power**: a weighted roll whose odds scale with remaining energy
//!
//! Every random draw comes from the caller's generator, so the same seed and
//! the same challenger inputs always yield the same opponent moves.

use rand::Rng;

use super::moves::{ArenaMove, MoveType, Power};

/// What the opponent can see when picking its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpponentView {
    pub own_energy: u32,
    pub challenger_energy: u32,
    /// Move the challenger actually played last round.
    pub challenger_last: Option<ArenaMove>,
}

/// Layer 1 decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Ambush,
    Counter(MoveType),
    Improvise(MoveType),
}

/// Opponent heuristic parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opponent {
    /// Chance (0..=100) to ambush when the challenger is low on energy.
    pub ambush_percent: u32,
}

impl Opponent {
    /// Challenger energy at or below which an ambush is considered.
    pub const LOW_ENERGY: u32 = 1;

    pub const fn new(ambush_percent: u32) -> Self {
        Self { ambush_percent }
    }

    pub fn choose<R: Rng + ?Sized>(&self, view: &OpponentView, rng: &mut R) -> ArenaMove {
        let intent = self.select_intent(view, rng);
        tracing::debug!(?intent, ?view, "opponent selected intent");

        let kind = match intent {
            Intent::Ambush => return ArenaMove::AMBUSH,
            Intent::Counter(kind) | Intent::Improvise(kind) => kind,
        };

        let power = Self::select_power(kind, view.own_energy, rng);
        tracing::debug!(%kind, %power, "opponent selected move");
        ArenaMove::new(kind, power)
    }

    fn select_intent<R: Rng + ?Sized>(&self, view: &OpponentView, rng: &mut R) -> Intent {
        if view.challenger_energy <= Self::LOW_ENERGY
            && ArenaMove::AMBUSH.affordable(view.own_energy)
            && rng.gen_range(0..100) < self.ambush_percent
        {
            return Intent::Ambush;
        }

        match view.challenger_last.and_then(|last| last.kind.countered_by()) {
            Some(counter) => Intent::Counter(counter),
            None => {
                let index = rng.gen_range(0..MoveType::CLASSIC.len());
                Intent::Improvise(MoveType::CLASSIC[index])
            }
        }
    }

    /// Rolls a power level, then lowers it until `kind` is affordable.
    ///
    /// Energy 2+: 30% power 3, 35% power 2, 35% power 1.
    /// Energy 1: 50% power 2, 50% power 1. Energy 0: power 1.
    fn select_power<R: Rng + ?Sized>(kind: MoveType, energy: u32, rng: &mut R) -> Power {
        let roll = rng.gen_range(0..100);
        let mut power = match energy {
            0 => Power::ONE,
            1 if roll < 50 => Power::TWO,
            1 => Power::ONE,
            _ if roll < 30 => Power::THREE,
            _ if roll < 65 => Power::TWO,
            _ => Power::ONE,
        };
        while !ArenaMove::new(kind, power).affordable(energy) {
            match power.lower() {
                Some(lower) => power = lower,
                None => break,
            }
        }
        power
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn view(own: u32, challenger: u32, last: Option<ArenaMove>) -> OpponentView {
        OpponentView {
            own_energy: own,
            challenger_energy: challenger,
            challenger_last: last,
        }
    }

    #[test]
    fn counters_last_classic_move() {
        let opponent = Opponent::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let last = ArenaMove::new(MoveType::Rock, Power::TWO);

        for _ in 0..50 {
            let chosen = opponent.choose(&view(3, 3, Some(last)), &mut rng);
            assert_eq!(chosen.kind, MoveType::Paper);
        }
    }

    #[test]
    fn always_ambushes_at_full_chance() {
        let opponent = Opponent::new(100);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let chosen = opponent.choose(&view(2, 1, None), &mut rng);
        assert_eq!(chosen, ArenaMove::AMBUSH);
    }

    #[test]
    fn never_ambushes_without_energy_for_it() {
        let opponent = Opponent::new(100);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let chosen = opponent.choose(&view(1, 0, None), &mut rng);
            assert_ne!(chosen.kind, MoveType::Shadow);
        }
    }

    #[test]
    fn improvises_after_shadow_or_without_history() {
        let opponent = Opponent::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shadow = ArenaMove::new(MoveType::Shadow, Power::ONE);
        for last in [None, Some(shadow)] {
            for _ in 0..50 {
                let chosen = opponent.choose(&view(3, 3, last), &mut rng);
                assert!(MoveType::CLASSIC.contains(&chosen.kind));
            }
        }
    }

    #[test]
    fn chosen_moves_are_always_affordable() {
        let opponent = Opponent::new(35);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for energy in 0..5 {
            for challenger in 0..3 {
                for _ in 0..30 {
                    let chosen = opponent.choose(&view(energy, challenger, None), &mut rng);
                    assert!(chosen.affordable(energy), "{chosen} at energy {energy}");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let opponent = Opponent::new(35);
        let mut first = ChaCha8Rng::seed_from_u64(99);
        let mut second = ChaCha8Rng::seed_from_u64(99);
        for energy in [3, 1, 0, 2, 4] {
            let v = view(energy, 1, None);
            assert_eq!(opponent.choose(&v, &mut first), opponent.choose(&v, &mut second));
        }
    }
}
