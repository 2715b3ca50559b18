//! This module contains the four-die [`Roll`] and the [`DiceSource`] trait that produces them.
//!
//! The game itself only ever throws through a `DiceSource`, so a seeded or scripted source can be
//! swapped in wherever the default entropy-seeded generator would be used.

use std::array;
use std::fmt;
use std::ops::RangeInclusive;

use fastrand::Rng;

use crate::error::GameError;

/// The number of dice thrown at once.
pub const DICE_PER_ROLL: usize = 4;

/// The faces of a six-sided die.
pub const FACES: RangeInclusive<u8> = 1..=6;

/// A single throw of all four dice. Every face is known to be within [`FACES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roll([u8; DICE_PER_ROLL]);

impl Roll {
    /// This function returns the face values in the order they were thrown.
    #[must_use]
    pub const fn faces(&self) -> [u8; DICE_PER_ROLL] {
        self.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third, fourth] = self.0;
        write!(f, "{first}, {second}, {third}, {fourth}")
    }
}

impl TryFrom<[u8; DICE_PER_ROLL]> for Roll {
    type Error = GameError;

    fn try_from(faces: [u8; DICE_PER_ROLL]) -> Result<Self, Self::Error> {
        match faces.iter().find(|&&face| !FACES.contains(&face)) {
            Some(&face) => Err(GameError::InvalidFace(face)),
            None => Ok(Self(faces)),
        }
    }
}

/// Anything that can throw the four dice of a roll.
pub trait DiceSource {
    /// This function throws all four dice at once, each one independently of the others.
    fn throw(&mut self) -> Roll;
}

impl DiceSource for Rng {
    fn throw(&mut self) -> Roll {
        Roll(array::from_fn(|_| self.u8(FACES)))
    }
}

/// A dice source that plays back a fixed list of rolls, for tests that need to know what comes
/// next.
#[cfg(test)]
pub(crate) struct ScriptedDice(std::collections::VecDeque<Roll>);

#[cfg(test)]
impl ScriptedDice {
    /// This function builds the source out of raw faces. Panics on faces off the die.
    pub(crate) fn new(rolls: &[[u8; DICE_PER_ROLL]]) -> Self {
        Self(
            rolls
                .iter()
                .map(|&faces| Roll::try_from(faces).expect("scripted faces are on the die"))
                .collect(),
        )
    }

    /// This function returns how many scripted rolls have not been thrown yet.
    pub(crate) fn remaining(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
impl DiceSource for ScriptedDice {
    fn throw(&mut self) -> Roll {
        self.0.pop_front().expect("the script ran out of rolls")
    }
}
