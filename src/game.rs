//! The game module drives the interactive session: it reads the command line, greets the players,
//! asks for their names and then runs the menu loop until someone exits or declines a rematch.

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use fastrand::Rng;

use crate::dice::DiceSource;
use crate::input::{play_again, take_action, take_name, take_target};
use crate::menu::MenuItem;
use crate::messages::{draw_scoreboard, render_champion, render_farewell, render_round, rules};
use crate::player::Seat;
use crate::session::{Phase, Session, TargetScore};

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. Every option also reads from an environment variable, so a
/// regular setup can live in the shell profile.
#[derive(Parser)]
#[command(name = "dice-duel", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The name of the player who throws first.
    ///
    /// When left out, the game asks for it before the first round.
    #[arg(long, env = "DICE_DUEL_FIRST", value_name = "NAME")]
    first: Option<String>,
    /// The name of the player who throws second.
    ///
    /// When left out, the game asks for it before the first round.
    #[arg(long, env = "DICE_DUEL_SECOND", value_name = "NAME")]
    second: Option<String>,
    /// The seed for the dice.
    ///
    /// Two games started with the same seed throw the same dice. Without it, the dice are seeded
    /// from the system's entropy.
    #[arg(long, env = "DICE_DUEL_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// The score a player must reach to win the match; a whole number greater than zero.
    #[arg(short, long, env = "DICE_DUEL_TARGET", value_name = "POINTS")]
    #[arg(default_value_t = TargetScore::default())]
    target: TargetScore,
}

/// Initializes the game state and runs the menu loop. This is a `main()` function of sorts though
/// it is still called from main.rs.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error, when writing to the terminal fails
/// - dialoguer::Error, when a prompt cannot be shown or read
/// - indicatif::style::TemplateError, when the scoreboard style cannot be built
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    let term = Term::stdout();
    let dice = cli.seed.map_or_else(Rng::new, Rng::with_seed);
    let mut session = Session::with_dice(dice).with_target(cli.target);
    log::debug!(
        "starting a match to {} with seed {:?}",
        session.target(),
        cli.seed
    );

    init_message(&term, session.target())?;
    name_players(&term, &mut session, [cli.first, cli.second])?;

    loop {
        match take_action(&term)? {
            MenuItem::PlayRound => {
                let outcome = session.play_round()?;
                term.write_line(&render_round(&session, &outcome)?)?;
                draw_scoreboard(&term, &session)?;

                if !settle_match(&term, &mut session)? {
                    break;
                }
            }
            MenuItem::ShowScores => draw_scoreboard(&term, &session)?,
            MenuItem::SetTarget => {
                let raw = take_target(&term, session.target())?;
                match session.set_target_str(&raw) {
                    Ok(()) => {
                        term.write_line(&format!(
                            "The target score is now {} points",
                            style(session.target()).bold()
                        ))?;
                        if !settle_match(&term, &mut session)? {
                            break;
                        }
                    }
                    Err(err) => term.write_line(&format!("{err}"))?,
                }
            }
            MenuItem::Restart => {
                session.reset();
                term.write_line(&format!("{}", style("The game starts over!").bold()))?;
            }
            MenuItem::Exit => {
                term.write_line(&render_farewell(&session)?)?;
                break;
            }
        }
    }

    Ok(())
}

/// This function clears the screen, sets the title of the console window to the name of the game
/// and prints the rules.
fn init_message(term: &Term, target: TargetScore) -> Result<()> {
    term.clear_screen()?;
    term.set_title("dice duel");
    term.write_line(&rules(target)?)?;
    Ok(())
}

/// This function settles both names: the ones given on the command line are used as they are,
/// the others are asked for. Blank answers keep the default seat names.
fn name_players<D: DiceSource>(
    term: &Term,
    session: &mut Session<D>,
    names: [Option<String>; 2],
) -> Result<()> {
    for (seat, name) in Seat::BOTH.into_iter().zip(names) {
        let name = match name {
            Some(name) => name,
            None => take_name(term, seat)?,
        };

        if !session.rename(seat, &name) {
            log::debug!("{seat} keeps the default name");
        }
    }

    Ok(())
}

/// This function deals with a won match, whether a round or a lowered target decided it: the
/// champion is congratulated and asked for a rematch. Returns whether the game goes on.
fn settle_match<D: DiceSource>(term: &Term, session: &mut Session<D>) -> Result<bool> {
    if session.phase() != Phase::MatchWon {
        return Ok(true);
    }

    if let Some(seat) = session.check_winner() {
        term.write_line(&render_champion(session.player(seat)))?;
    }
    if !play_again(term)? {
        return Ok(false);
    }

    session.reset();
    term.write_line(&format!("{}", style("The game starts over!").bold()))?;
    Ok(true)
}
