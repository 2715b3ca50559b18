//! The scoring rules. Only the multiset of faces matters; the order the dice landed in never
//! changes the result.
//!
//! - Four of a kind scores the face plus twelve, from 13 for ones up to 18 for sixes.
//! - Three of a kind does not score.
//! - Two pairs score the higher pair, doubled.
//! - A single pair scores the sum of the two other dice.
//! - Four different faces do not score.

use crate::dice::{Roll, FACES};

/// Added to the face of a four of a kind.
pub const QUAD_OFFSET: u32 = 12;

/// The result of scoring a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The roll scores this many points and ends the turn.
    Points(u32),
    /// The roll matches no scoring pattern and the player must throw again.
    RerollRequired,
}

impl Outcome {
    /// This function returns the points of a scoring roll, or `None` if the roll must be thrown
    /// again.
    #[must_use]
    pub const fn points(self) -> Option<u32> {
        match self {
            Self::Points(points) => Some(points),
            Self::RerollRequired => None,
        }
    }
}

/// This function scores a roll, or tells that it has to be thrown again.
#[must_use]
pub fn score(roll: &Roll) -> Outcome {
    let faces = roll.faces();

    // (face, how many dice show it), ascending by face, faces not thrown left out
    let tally: Vec<(u8, usize)> = FACES
        .map(|face| (face, faces.iter().filter(|&&die| die == face).count()))
        .filter(|&(_, seen)| seen > 0)
        .collect();

    if let Some(&(face, _)) = tally.iter().find(|&&(_, seen)| seen == 4) {
        return Outcome::Points(u32::from(face) + QUAD_OFFSET);
    }

    if tally.iter().any(|&(_, seen)| seen == 3) {
        return Outcome::RerollRequired;
    }

    let pairs: Vec<u8> = tally
        .iter()
        .filter(|&&(_, seen)| seen == 2)
        .map(|&(face, _)| face)
        .collect();

    match *pairs.as_slice() {
        [low, high] => Outcome::Points(u32::from(low.max(high)) * 2),
        [pair] => Outcome::Points(
            faces
                .iter()
                .filter(|&&die| die != pair)
                .map(|&die| u32::from(die))
                .sum(),
        ),
        _ => Outcome::RerollRequired,
    }
}
