//! Battle turn loop.

use rand::Rng;

use super::input::{ArenaEvent, ArenaInput, ArenaPlayer, ArenaStatus, RULES, parse_input};
use super::moves::ArenaMove;
use super::opponent::{Opponent, OpponentView};
use super::rules::{Competitor, PlayedMove, Side, Verdict, judge};
use crate::config::ArenaConfig;

/// How a battle (including any rematches) ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArenaOutcome {
    ChallengerWins,
    OpponentWins,
    Quit,
}

/// Everything that happened in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub round: u32,
    pub challenger: PlayedMove,
    pub opponent: PlayedMove,
    pub verdict: Verdict,
    pub challenger_after: Competitor,
    pub opponent_after: Competitor,
}

/// Result of [`ArenaEngine::play`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaResult {
    pub outcome: ArenaOutcome,
    /// Rounds of the final battle.
    pub rounds: Vec<RoundReport>,
    pub challenger: Competitor,
    pub opponent: Competitor,
    /// Battles fought, rematches included.
    pub battles: u32,
}

impl ArenaResult {
    pub fn challenger_won(&self) -> bool {
        self.outcome == ArenaOutcome::ChallengerWins
    }
}

/// Mutable state of a single battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Battle {
    pub round: u32,
    pub challenger: Competitor,
    pub opponent: Competitor,
    /// Move the challenger actually played last round.
    pub challenger_last: Option<ArenaMove>,
}

impl Battle {
    pub fn new(starting_energy: u32) -> Self {
        Self {
            round: 0,
            challenger: Competitor::new(starting_energy),
            opponent: Competitor::new(starting_energy),
            challenger_last: None,
        }
    }

    /// Winner once either side reached `target` points.
    pub fn decided(&self, target: u32) -> Option<Side> {
        if self.challenger.points >= target {
            Some(Side::Challenger)
        } else if self.opponent.points >= target {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Runs battles between an [`ArenaPlayer`] and the heuristic [`Opponent`].
///
/// All randomness is drawn from `rng`, so a seeded generator plus identical
/// challenger inputs reproduces a battle exactly.
pub struct ArenaEngine<R: Rng> {
    config: ArenaConfig,
    opponent: Opponent,
    rng: R,
}

impl<R: Rng> ArenaEngine<R> {
    pub fn new(config: &ArenaConfig, rng: R) -> Self {
        Self {
            config: config.clone(),
            opponent: Opponent::new(config.ambush_percent),
            rng,
        }
    }

    /// Plays until the challenger wins, quits, or loses and declines a
    /// rematch.
    pub fn play(&mut self, player: &mut dyn ArenaPlayer) -> ArenaResult {
        let mut battles = 0;
        loop {
            battles += 1;
            let result = self.battle(player, battles);
            tracing::info!(
                outcome = ?result.outcome,
                rounds = result.rounds.len(),
                battle = battles,
                "arena battle finished"
            );
            if result.outcome == ArenaOutcome::OpponentWins && player.rematch(&result) {
                tracing::debug!("challenger requested a rematch");
                continue;
            }
            return result;
        }
    }

    fn battle(&mut self, player: &mut dyn ArenaPlayer, battles: u32) -> ArenaResult {
        let mut battle = Battle::new(self.config.starting_energy);
        let mut rounds = Vec::new();

        let outcome = loop {
            match battle.decided(self.config.target_points) {
                Some(Side::Challenger) => break ArenaOutcome::ChallengerWins,
                Some(Side::Opponent) => break ArenaOutcome::OpponentWins,
                None => {}
            }

            let status = ArenaStatus {
                round: battle.round + 1,
                target_points: self.config.target_points,
                challenger: battle.challenger,
                opponent: battle.opponent,
            };
            let Some(requested) = Self::prompt(player, &status) else {
                break ArenaOutcome::Quit;
            };

            let report = self.play_round(&mut battle, requested);
            player.notify(&ArenaEvent::Round(&report));
            rounds.push(report);
        };

        ArenaResult {
            outcome,
            rounds,
            challenger: battle.challenger,
            opponent: battle.opponent,
            battles,
        }
    }

    /// Reads tokens until a move arrives. `None` on quit or exhausted input.
    fn prompt(player: &mut dyn ArenaPlayer, status: &ArenaStatus) -> Option<ArenaMove> {
        loop {
            let line = player.next_input(status)?;
            match parse_input(&line) {
                Ok(ArenaInput::Move(requested)) => return Some(requested),
                Ok(ArenaInput::Quit) => return None,
                Ok(ArenaInput::Rules) => player.notify(&ArenaEvent::Rules(RULES)),
                Err(err) => {
                    tracing::debug!(%err, "rejected arena input");
                    player.notify(&ArenaEvent::InvalidInput(&err));
                }
            }
        }
    }

    /// Resolves one round: opponent choice, affordability, verdict, payment,
    /// scoring and regeneration.
    pub fn play_round(&mut self, battle: &mut Battle, requested: ArenaMove) -> RoundReport {
        let view = OpponentView {
            own_energy: battle.opponent.energy,
            challenger_energy: battle.challenger.energy,
            challenger_last: battle.challenger_last,
        };
        let opponent_move = self.opponent.choose(&view, &mut self.rng);

        let challenger = PlayedMove::settle(requested, battle.challenger.energy);
        let opponent = PlayedMove::settle(opponent_move, battle.opponent.energy);
        let verdict = judge(challenger.played, opponent.played);

        battle.challenger.pay(challenger.played);
        battle.opponent.pay(opponent.played);
        battle.challenger.settle_round(Side::Challenger, verdict);
        battle.opponent.settle_round(Side::Opponent, verdict);
        battle.round += 1;
        battle.challenger_last = Some(challenger.played);

        tracing::debug!(
            round = battle.round,
            challenger = %challenger.played,
            opponent = %opponent.played,
            downgraded = challenger.downgraded,
            winner = ?verdict.winner,
            reason = ?verdict.reason,
            "arena round resolved"
        );

        RoundReport {
            round: battle.round,
            challenger,
            opponent,
            verdict,
            challenger_after: battle.challenger,
            opponent_after: battle.opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::input::ScriptedPlayer;
    use crate::fixtures::Outguesser;
    use crate::arena::moves::{MoveType, Power};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn engine(seed: u64) -> ArenaEngine<ChaCha8Rng> {
        let config = ArenaConfig::default().with_seed(seed);
        ArenaEngine::new(&config, ChaCha8Rng::seed_from_u64(config.seed))
    }

    #[test]
    fn same_seed_same_battle() {
        let script: Vec<&str> = ["rock 2", "paper", "shadow 1", "scissors 3", "rock"]
            .into_iter()
            .cycle()
            .take(40)
            .collect();

        let first = engine(5).play(&mut ScriptedPlayer::new(script.clone()));
        let second = engine(5).play(&mut ScriptedPlayer::new(script));
        assert_eq!(first, second);
        assert!(!first.rounds.is_empty());
    }

    #[test]
    fn quit_at_prompt_ends_battle() {
        let mut player = ScriptedPlayer::new(["rock", "quit", "paper"]);
        let result = engine(1).play(&mut player);

        assert_eq!(result.outcome, ArenaOutcome::Quit);
        assert_eq!(result.rounds.len(), 1);
        assert_eq!(player.remaining(), 1);
    }

    #[test]
    fn exhausted_input_counts_as_quit() {
        let result = engine(1).play(&mut ScriptedPlayer::new(Vec::<String>::new()));
        assert_eq!(result.outcome, ArenaOutcome::Quit);
        assert!(result.rounds.is_empty());
    }

    #[test]
    fn rules_and_bad_tokens_reprompt_without_a_round() {
        let mut player = ScriptedPlayer::new(["rules", "lizard", "rock 9", "quit"]);
        let result = engine(1).play(&mut player);

        assert_eq!(result.outcome, ArenaOutcome::Quit);
        assert!(result.rounds.is_empty());
        assert_eq!(result.challenger, Competitor::new(3));
        assert_eq!(player.notices().len(), 3);
        assert_eq!(player.notices()[0], RULES);
    }

    #[test]
    fn predictable_challenger_loses_and_may_rematch() {
        let rocks = std::iter::repeat("rock").take(40);
        let mut player = ScriptedPlayer::new(rocks).with_rematches([true]);
        let result = engine(9).play(&mut player);

        assert_eq!(result.outcome, ArenaOutcome::OpponentWins);
        assert_eq!(result.battles, 2);
        assert_eq!(result.opponent.points, 5);
    }

    #[test]
    fn outguessing_the_counter_wins() {
        let mut player = Outguesser::new();
        let result = engine(3).play(&mut player);

        assert!(result.challenger_won());
        assert_eq!(result.challenger.points, 5);
        assert!(result.rounds.len() <= 6);
    }

    #[test]
    fn unaffordable_request_is_played_as_fallback() {
        let mut engine = engine(2);
        let mut battle = Battle::new(0);
        let report = engine.play_round(&mut battle, ArenaMove::new(MoveType::Shadow, Power::THREE));

        assert!(report.challenger.downgraded);
        assert_eq!(report.challenger.played, ArenaMove::FALLBACK);
        assert!(report.challenger_after.energy >= 1);
    }

    proptest! {
        #[test]
        fn played_moves_are_always_paid_for(
            seed in any::<u64>(),
            requests in prop::collection::vec((0usize..4, 1u8..=3), 1..40),
        ) {
            let mut engine = engine(seed);
            let mut battle = Battle::new(ArenaConfig::DEFAULT_STARTING_ENERGY);
            let kinds = [MoveType::Rock, MoveType::Paper, MoveType::Scissors, MoveType::Shadow];

            for (kind, level) in requests {
                let before = battle;
                let requested = ArenaMove::new(kinds[kind], Power::new(level).unwrap());
                let report = engine.play_round(&mut battle, requested);

                prop_assert!(report.challenger.played.cost() <= before.challenger.energy);
                prop_assert!(report.opponent.played.cost() <= before.opponent.energy);
                prop_assert!(report.challenger_after.energy >= 1);
                prop_assert!(report.opponent_after.energy >= 1);
                prop_assert!(
                    report.challenger_after.points + report.opponent_after.points
                        <= before.challenger.points + before.opponent.points + 1
                );
            }
        }
    }
}
