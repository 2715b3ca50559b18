//! This module renders everything the game prints: the rules, round reports, the scoreboard and the
//! end-of-match messages. The text is built with `write!` into plain strings so it can be checked
//! without a terminal; only [`draw_scoreboard`] talks to the terminal directly.

use std::fmt::{self, Write as _};

use anyhow::Result;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::dice::DiceSource;
use crate::player::{Player, Seat};
use crate::round::{RoundOutcome, Turn};
use crate::scoring::QUAD_OFFSET;
use crate::session::{Session, TargetScore};

/// The rule over and under the round headers.
const RULE: &str = "==================================================";

/// This function returns the welcome banner together with the rules of the game.
pub(crate) fn rules(target: TargetScore) -> Result<String, fmt::Error> {
    let mut output = String::new();

    writeln!(output, "{}", style("Welcome to the dice duel!").bold())?;
    writeln!(output)?;
    writeln!(output, "Rules:")?;
    writeln!(output, "- Every throw uses four dice.")?;
    write!(output, "- Four of a kind scores the face plus {QUAD_OFFSET}")?;
    writeln!(output, " (6: 18, 5: 17, 4: 16, 3: 15, 2: 14, 1: 13).")?;
    writeln!(output, "- One pair scores the sum of the other two dice.")?;
    writeln!(output, "- Two pairs score the higher pair, doubled.")?;
    writeln!(output, "- Three of a kind or four different faces: throw again.")?;
    write!(
        output,
        "- The first player to reach {} points wins the match.",
        style(target).bold()
    )?;

    Ok(output)
}

/// This function appends the report of a single turn: every reroll, then the scoring throw.
fn render_turn(output: &mut String, player: &Player, turn: &Turn) -> fmt::Result {
    writeln!(output, "--- {}'s turn ---", style(player.name()).bold())?;

    for roll in turn.rerolls() {
        writeln!(
            output,
            "  {} threw {roll}: nothing scores, throwing again",
            player.name()
        )?;
    }

    writeln!(
        output,
        "  {} threw {} and scores {} points",
        player.name(),
        turn.scoring_roll(),
        style(turn.points()).bold().green()
    )
}

/// This function returns the report of a finished round: both turns, then who took the round.
/// The running totals come from the session, so it must be the session that played the round.
pub(crate) fn render_round<D: DiceSource>(
    session: &Session<D>,
    outcome: &RoundOutcome,
) -> Result<String, fmt::Error> {
    let mut output = String::new();

    writeln!(output, "{RULE}")?;
    writeln!(
        output,
        "{}",
        style(format!("Round {} begins!", outcome.number())).bold()
    )?;
    writeln!(output, "{RULE}")?;

    for seat in Seat::BOTH {
        let player = session.player(seat);
        render_turn(&mut output, player, outcome.turn(seat))?;
        writeln!(output, "  {} now has {} points", player.name(), player.total_score())?;
    }

    let first = outcome.turn(Seat::First).points();
    let second = outcome.turn(Seat::Second).points();
    write!(output, "Round {} result: ", outcome.number())?;
    match outcome.winner() {
        Some(seat) => {
            let (won, lost) = match seat {
                Seat::First => (first, second),
                Seat::Second => (second, first),
            };
            write!(
                output,
                "{} wins the round ({won} vs {lost})",
                style(session.player(seat).name()).bold().cyan()
            )?;
        }
        None => write!(output, "{} ({first} vs {second})", style("tie").bold().yellow())?,
    }

    Ok(output)
}

/// This function returns the plain-text scoreboard: total and rounds won for each player.
pub(crate) fn render_scores<D: DiceSource>(session: &Session<D>) -> Result<String, fmt::Error> {
    let mut output = String::new();

    write!(
        output,
        "{}",
        style(format!(
            "--- Scores after {} rounds (target {}) ---",
            session.round_count(),
            session.target()
        ))
        .bold()
    )?;
    for seat in Seat::BOTH {
        let player = session.player(seat);
        write!(
            output,
            "\n{}: {} points (won {} rounds)",
            player.name(),
            player.total_score(),
            player.rounds_won()
        )?;
    }

    Ok(output)
}

/// This function prints the scoreboard. On a terminal every player also gets a bar showing how far
/// they are from the target; anywhere else the plain-text board is written instead.
pub(crate) fn draw_scoreboard<D: DiceSource>(term: &Term, session: &Session<D>) -> Result<()> {
    if !term.is_term() {
        term.write_line(&render_scores(session)?)?;
        return Ok(());
    }

    let target = session.target().get();
    let bar_style =
        ProgressStyle::with_template("{prefix:>16.bold} [{bar:30.cyan/blue}] {pos:>3}/{len} {msg}")?
            .progress_chars("=> ");

    term.write_line(&format!(
        "{}",
        style(format!("--- Scores after {} rounds ---", session.round_count())).bold()
    ))?;

    for seat in Seat::BOTH {
        let player = session.player(seat);
        let bar = ProgressBar::with_draw_target(
            Some(u64::from(target)),
            ProgressDrawTarget::term(term.clone(), 20),
        )
        .with_style(bar_style.clone())
        .with_prefix(player.name().to_owned())
        .with_message(format!(
            "{} points, {} rounds won",
            player.total_score(),
            player.rounds_won()
        ))
        .with_position(u64::from(player.total_score().min(target)));

        bar.abandon();
    }

    Ok(())
}

/// This function returns the congratulations for the player who reached the target.
pub(crate) fn render_champion(player: &Player) -> String {
    format!(
        "{}\nFinal score: {} points\nGame over!",
        style(format!("Congratulations, {} wins the match!", player.name()))
            .bold()
            .green(),
        player.total_score()
    )
}

/// This function returns the closing message printed when a player leaves the game.
pub(crate) fn render_farewell<D: DiceSource>(session: &Session<D>) -> Result<String, fmt::Error> {
    let mut output = String::new();

    writeln!(output, "{}", style("Game over!").bold())?;
    writeln!(output, "{}", render_scores(session)?)?;
    write!(output, "Thanks for playing!")?;

    Ok(output)
}
