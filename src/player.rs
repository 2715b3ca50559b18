//! This module contains the per-player counters and the [`Seat`] used to refer to a player without
//! borrowing them from the session.

use std::fmt;

/// One of the two seats at the table. The first seat throws first in every round and wins the
/// match when both players pass the target in the same round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    /// The player who throws first.
    First,
    /// The player who throws second.
    Second,
}

impl Seat {
    /// Both seats, in playing order.
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// This function returns the name a player in this seat starts out with.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::First => "Player 1",
            Self::Second => "Player 2",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// A player and their running counters for the current match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// This field contains the display name; never empty.
    name: String,
    /// This field contains how many rounds the player won outright. Ties count for nobody.
    rounds_won: u32,
    /// This field contains the sum of every turn score of the match.
    total_score: u32,
}

impl Player {
    /// This function creates a player with zeroed counters.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            rounds_won: 0,
            total_score: 0,
        }
    }

    /// This function returns the display name of the player.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This function returns how many rounds the player won in the current match.
    #[must_use]
    pub const fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// This function returns the running score of the player in the current match.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// This function adds the points of a finished turn to the running score.
    pub(crate) const fn bank(&mut self, points: u32) {
        self.total_score = self.total_score.saturating_add(points);
    }

    /// This function zeroes both counters. The name is kept.
    pub(crate) const fn clear(&mut self) {
        self.rounds_won = 0;
        self.total_score = 0;
    }

    /// This function counts one more round won.
    pub(crate) const fn record_round_win(&mut self) {
        self.rounds_won = self.rounds_won.saturating_add(1);
    }

    /// This function replaces the name with the trimmed input, unless nothing is left after
    /// trimming. Returns whether the name changed hands.
    pub(crate) fn rename(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        name.clone_into(&mut self.name);
        true
    }
}
