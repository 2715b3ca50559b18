//! The session owns everything a match needs: both players, the dice, the round counter and the
//! target score. It is also where the game's state machine lives.
//!
//! ```text
//! AwaitingAction -> RoundInProgress -> RoundComplete -> AwaitingAction
//!                                                    -> MatchWon -> (reset) AwaitingAction
//! AwaitingAction <-> MatchWon whenever a new target is set
//! ```

use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};
use std::str::FromStr;

use fastrand::Rng;

use crate::dice::DiceSource;
use crate::error::GameError;
use crate::player::{Player, Seat};
use crate::round::{resolve_turn, RoundOutcome};

/// The target score of a new session.
pub const DEFAULT_TARGET: u32 = 50;

/// The running score a player must reach to win. Always greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetScore(NonZeroU32);

impl TargetScore {
    /// This function returns the target as a plain number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for TargetScore {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_TARGET).unwrap_or(NonZeroU32::MIN))
    }
}

impl fmt::Display for TargetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TargetScore {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_parse| GameError::InvalidTargetScore(s.to_owned()))
            .and_then(Self::try_from)
    }
}

impl TryFrom<i64> for TargetScore {
    type Error = GameError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| GameError::InvalidTargetScore(value.to_string()))
    }
}

/// Where the session stands between commands.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "The phases are listed in the order a round goes through them."
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing is happening; a round may be started or the session reconfigured.
    AwaitingAction,
    /// Turns are being thrown.
    RoundInProgress,
    /// Both turns are in and the counters are updated; the win check is next.
    RoundComplete,
    /// A player reached the target. A reset, or a target raised past both players, leads out of
    /// here.
    MatchWon,
}

/// A whole match between two players.
///
/// The dice source is a type parameter so tests and replays can feed known rolls; the default is
/// `fastrand`'s generator seeded from the system's entropy.
#[derive(Debug)]
pub struct Session<D = Rng> {
    /// This field contains the source every roll of the match is thrown from.
    dice: D,
    /// This field contains the player who throws first.
    first: Player,
    /// This field contains the current state of the state machine.
    phase: Phase,
    /// This field contains how many rounds were completed since the last reset.
    round_count: u32,
    /// This field contains the player who throws second.
    second: Player,
    /// This field contains the score that ends the match.
    target: TargetScore,
    /// This field contains the optional bound on throws within one turn.
    throw_cap: Option<NonZeroUsize>,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_dice(Rng::new())
    }
}

impl<D: DiceSource> Session<D> {
    /// This function returns the winner under the current target. The first seat is checked first,
    /// so it wins when both players are past the target.
    #[must_use]
    pub const fn check_winner(&self) -> Option<Seat> {
        if self.first.total_score() >= self.target.get() {
            Some(Seat::First)
        } else if self.second.total_score() >= self.target.get() {
            Some(Seat::Second)
        } else {
            None
        }
    }

    /// This function returns the current state of the session.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// This function plays a round: a turn for the first seat, then one for the second, then the
    /// round winner gets their round counted and the target is checked.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchOver`] when the match was already won; reset it first.
    ///
    /// # Panics
    ///
    /// Only with a throw cap set, when a turn goes over it. See [`Session::with_throw_cap`].
    pub fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        if self.phase == Phase::MatchWon {
            return Err(GameError::MatchOver);
        }

        self.phase = Phase::RoundInProgress;
        self.round_count = self.round_count.saturating_add(1);
        log::debug!("round {} started", self.round_count);

        let first = resolve_turn(&mut self.first, &mut self.dice, self.throw_cap);
        let second = resolve_turn(&mut self.second, &mut self.dice, self.throw_cap);

        self.phase = Phase::RoundComplete;
        let outcome = RoundOutcome::new(self.round_count, first, second, self.check_winner());
        if let Some(seat) = outcome.winner() {
            self.player_mut(seat).record_round_win();
        }
        log::debug!(
            "round {} finished {} to {}",
            self.round_count,
            outcome.turn(Seat::First).points(),
            outcome.turn(Seat::Second).points(),
        );

        self.phase = match outcome.match_winner() {
            Some(seat) => {
                log::info!(
                    "{} won the match after {} rounds",
                    self.player(seat).name(),
                    self.round_count
                );
                Phase::MatchWon
            }
            None => Phase::AwaitingAction,
        };

        Ok(outcome)
    }

    /// This function returns the player sitting in the given seat.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// This function returns the player sitting in the given seat, for updating.
    const fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::First => &mut self.first,
            Seat::Second => &mut self.second,
        }
    }

    /// This function renames the player in the given seat. Blank names are ignored and the current
    /// name stays; the return value tells whether the name changed.
    pub fn rename(&mut self, seat: Seat, name: &str) -> bool {
        self.player_mut(seat).rename(name)
    }

    /// This function zeroes both players' counters and the round counter and leaves the match
    /// ready for a new first round. Names and target are kept.
    pub fn reset(&mut self) {
        self.first.clear();
        self.second.clear();
        self.round_count = 0;
        self.phase = Phase::AwaitingAction;
        log::info!("match reset; target stays at {}", self.target);
    }

    /// This function applies an already validated target, or logs and passes on the rejection.
    /// Between rounds the phase follows the new target: a match whose leader is now past it is
    /// won, and a won match whose leader falls short of it is open again.
    fn retarget(&mut self, target: Result<TargetScore, GameError>) -> Result<(), GameError> {
        let target = target.inspect_err(|err| {
            log::warn!("target score left at {}: {err}", self.target);
        })?;

        log::debug!("target score changed from {} to {target}", self.target);
        self.target = target;
        self.phase = match self.check_winner() {
            Some(seat) => {
                if self.phase != Phase::MatchWon {
                    log::info!(
                        "{} is already past the new target and wins the match",
                        self.player(seat).name()
                    );
                }
                Phase::MatchWon
            }
            None => Phase::AwaitingAction,
        };

        Ok(())
    }

    /// This function returns how many rounds were completed since the last reset.
    #[must_use]
    pub const fn round_count(&self) -> u32 {
        self.round_count
    }

    /// This function changes the target score.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTargetScore`] for zero, negative or oversized values; the
    /// previous target stays in place. An accepted target is checked right away, see
    /// [`Session::check_winner`].
    pub fn set_target(&mut self, target: i64) -> Result<(), GameError> {
        self.retarget(TargetScore::try_from(target))
    }

    /// This function changes the target score from text as typed by a player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTargetScore`] when the text is not a whole number greater than
    /// zero; the previous target stays in place.
    pub fn set_target_str(&mut self, target: &str) -> Result<(), GameError> {
        self.retarget(target.parse())
    }

    /// This function returns the score that ends the match.
    #[must_use]
    pub const fn target(&self) -> TargetScore {
        self.target
    }

    /// This function starts a session with default names, the default target and the given dice.
    #[must_use]
    pub fn with_dice(dice: D) -> Self {
        Self {
            dice,
            first: Player::new(Seat::First.default_name()),
            phase: Phase::AwaitingAction,
            round_count: 0,
            second: Player::new(Seat::Second.default_name()),
            target: TargetScore::default(),
            throw_cap: None,
        }
    }

    /// This function sets the target score of a new session.
    #[must_use]
    pub const fn with_target(mut self, target: TargetScore) -> Self {
        self.target = target;
        self
    }

    /// This function bounds how many throws a single turn may take. Going over the bound panics;
    /// it exists to catch a dice source that never produces a scoring roll.
    #[must_use]
    pub const fn with_throw_cap(mut self, cap: NonZeroUsize) -> Self {
        self.throw_cap = Some(cap);
        self
    }
}
