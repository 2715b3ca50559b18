//! This module holds the error type shared by the dice, scoring and session modules. None of these
//! errors is fatal; the front end reports them to the player and carries on.

use console::style;

/// This enum holds every way the game core may refuse an operation. The messages are styled the
/// same way the rest of the terminal output is, so they can be printed as they are.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// This variant is used when a roll is built from a value that is not the face of a six-sided
    /// die.
    #[error(
        "{label}: {0} is not the face of a six-sided die",
        label = style("invalid face").bold().underlined()
    )]
    InvalidFace(u8),
    /// This variant is used when a target score is zero, negative or not a number at all. The
    /// rejected input is kept for the message.
    #[error(
        "{label}: the target must be a whole number greater than zero, got {0:?}",
        label = style("invalid target score").bold().underlined()
    )]
    InvalidTargetScore(String),
    /// This variant is used when a round is requested after a player already reached the target.
    #[error("{}: reset the game before playing another round", style("the match is over").bold().underlined())]
    MatchOver,
}

#[cfg(test)]
mod tests {
    use super::GameError;

    #[test]
    fn messages_carry_the_rejected_value() {
        let face = GameError::InvalidFace(9).to_string();
        assert!(face.contains("invalid face"), "unexpected message: {face}");
        assert!(face.contains("9 is not the face"), "unexpected message: {face}");

        let target = GameError::InvalidTargetScore("-3".to_owned()).to_string();
        assert!(target.contains("invalid target score"), "unexpected message: {target}");
        assert!(target.contains("got \"-3\""), "unexpected message: {target}");

        let over = GameError::MatchOver.to_string();
        assert!(over.contains("the match is over"), "unexpected message: {over}");
    }
}
