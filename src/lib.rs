//! The library components of the dice duel. They hold the scoring rules, the players, the round
//! and turn resolution and the session that ties a match together, plus the interactive front end
//! that drives a session from the terminal.
//!
//! The starting point of the interactive game is the game.rs file, which contains the menu loop.
//! Everything else can be driven without a terminal through [`Session`], with any
//! [`DiceSource`] supplying the rolls.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod dice;
mod error;
mod game;
mod input;
mod menu;
mod messages;
mod player;
mod round;
mod scoring;
mod session;

pub use dice::{DiceSource, Roll, DICE_PER_ROLL, FACES};
pub use error::GameError;
pub use game::init;
pub use player::{Player, Seat};
pub use round::{RoundOutcome, Turn};
pub use scoring::{score, Outcome, QUAD_OFFSET};
pub use session::{Phase, Session, TargetScore, DEFAULT_TARGET};
