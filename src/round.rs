//! This module resolves turns and rounds. A turn throws until a roll scores; a round is one turn
//! per seat, won by the higher turn score.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::dice::{DiceSource, Roll};
use crate::player::{Player, Seat};
use crate::scoring::{score, Outcome};

/// Everything a player threw during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// This field contains the points the scoring roll was worth.
    points: u32,
    /// This field contains the rolls that did not score, in the order they were thrown.
    rerolls: Vec<Roll>,
    /// This field contains the roll that ended the turn.
    scoring_roll: Roll,
}

impl Turn {
    /// This function returns the points the turn added to the player's running score.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// This function returns every roll that had to be thrown again, oldest first.
    #[must_use]
    pub fn rerolls(&self) -> &[Roll] {
        &self.rerolls
    }

    /// This function returns the roll that scored.
    #[must_use]
    pub const fn scoring_roll(&self) -> Roll {
        self.scoring_roll
    }
}

/// The report of a finished round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// This field contains the turn of the first seat.
    first: Turn,
    /// This field contains the seat that reached the target, if any did.
    match_winner: Option<Seat>,
    /// This field contains the 1-based number of the round within the match.
    number: u32,
    /// This field contains the turn of the second seat.
    second: Turn,
    /// This field contains the seat with the higher turn score, or `None` on a tie.
    winner: Option<Seat>,
}

impl RoundOutcome {
    /// This function puts a report together once both turns are played.
    pub(crate) fn new(number: u32, first: Turn, second: Turn, match_winner: Option<Seat>) -> Self {
        let winner = decide(first.points(), second.points());
        Self {
            first,
            match_winner,
            number,
            second,
            winner,
        }
    }

    /// This function tells whether both turns scored the same.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    /// This function returns the seat that reached the target score with this round, if any.
    #[must_use]
    pub const fn match_winner(&self) -> Option<Seat> {
        self.match_winner
    }

    /// This function returns the number of the round, starting at one.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// This function returns the turn played from the given seat.
    #[must_use]
    pub const fn turn(&self, seat: Seat) -> &Turn {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// This function returns the seat that won the round, or `None` if it was a tie.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        self.winner
    }
}

/// This function picks the round winner: the strictly higher score, nobody on equal scores.
pub(crate) fn decide(first: u32, second: u32) -> Option<Seat> {
    match first.cmp(&second) {
        Ordering::Greater => Some(Seat::First),
        Ordering::Less => Some(Seat::Second),
        Ordering::Equal => None,
    }
}

/// This function plays one turn: it keeps throwing until a roll scores, banks the points on the
/// player and returns the whole turn.
///
/// There is no bound on the number of throws unless `throw_cap` is given. Every throw scores with
/// positive probability, so a fair source always ends the turn.
///
/// # Panics
///
/// With a `throw_cap`, panics once that many throws in a row failed to score. Only a broken dice
/// source gets there.
pub(crate) fn resolve_turn<D: DiceSource + ?Sized>(
    player: &mut Player,
    dice: &mut D,
    throw_cap: Option<NonZeroUsize>,
) -> Turn {
    let mut rerolls = Vec::new();

    loop {
        if let Some(cap) = throw_cap {
            assert!(
                rerolls.len() < cap.get(),
                "{} threw {} rolls without scoring; the dice source never lands a scoring roll",
                player.name(),
                rerolls.len(),
            );
        }

        let roll = dice.throw();
        match score(&roll) {
            Outcome::Points(points) => {
                player.bank(points);
                log::debug!(
                    "{} scored {points} with {roll} after {} rerolls; total {}",
                    player.name(),
                    rerolls.len(),
                    player.total_score(),
                );
                break Turn {
                    points,
                    rerolls,
                    scoring_roll: roll,
                };
            }
            Outcome::RerollRequired => {
                log::trace!("{} threw {roll}, which does not score", player.name());
                rerolls.push(roll);
            }
        }
    }
}
