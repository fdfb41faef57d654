//! Terminal entry point.
use std::io::{self, BufRead, Write};

use anyhow::Result;
use game_core::arena::{ArenaEvent, ArenaOutcome, ArenaResult, ArenaStatus, RULES};
use game_core::ArenaPlayer;
use runtime::{RuntimeConfig, Session, init_tracing};

/// Arena player backed by the same stdin the main loop reads.
struct TerminalPlayer<'a> {
    lines: &'a mut dyn Iterator<Item = io::Result<String>>,
}

impl ArenaPlayer for TerminalPlayer<'_> {
    fn next_input(&mut self, status: &ArenaStatus) -> Option<String> {
        println!(
            "[round {}] you {}pt/{}en vs guardian {}pt/{}en (first to {})",
            status.round,
            status.challenger.points,
            status.challenger.energy,
            status.opponent.points,
            status.opponent.energy,
            status.target_points,
        );
        read_line(&mut *self.lines, "your move> ")
    }

    fn notify(&mut self, event: &ArenaEvent<'_>) {
        match event {
            ArenaEvent::Rules(text) => println!("{text}"),
            ArenaEvent::InvalidInput(err) => println!("{err}"),
            ArenaEvent::Round(report) => {
                if report.challenger.downgraded {
                    println!(
                        "Not enough energy for {}; you play {} instead.",
                        report.challenger.requested, report.challenger.played
                    );
                }
                println!(
                    "You: {}  Guardian: {}  -> {:?} ({:?})",
                    report.challenger.played,
                    report.opponent.played,
                    report.verdict.winner,
                    report.verdict.reason
                );
            }
        }
    }

    fn rematch(&mut self, result: &ArenaResult) -> bool {
        if result.outcome != ArenaOutcome::OpponentWins {
            return false;
        }
        matches!(
            read_line(&mut *self.lines, "You lost. Rematch? (y/n)> ").as_deref(),
            Some("y" | "yes")
        )
    }
}

fn read_line<I>(lines: &mut I, prompt: &str) -> Option<String>
where
    I: Iterator<Item = io::Result<String>> + ?Sized,
{
    print!("{prompt}");
    io::stdout().flush().ok()?;
    lines.next()?.ok()
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = RuntimeConfig::from_env();
    init_tracing(&config.log_filter);

    let mut session = Session::open(&config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", session.describe()?);
    while !session.is_over() {
        println!("What to do? Choose from: {}", session.options().join(", "));
        let Some(line) = read_line(&mut lines, "\nEnter action: ") else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("rules") {
            println!("{RULES}");
            continue;
        }

        let mut player = TerminalPlayer { lines: &mut lines };
        match session.handle(&line, &mut player) {
            Ok(outcome) => println!("========\n{outcome}"),
            Err(err) => println!("{err}"),
        }
    }

    let state = session.engine().state();
    println!("Final score: {} ({:?})", state.score, state.status);
    Ok(())
}
