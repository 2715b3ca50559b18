//! This module contains the entries of the main menu shown between rounds.

/// This enum holds the entries of the main menu. Each one maps to a single command on the session.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "It's best if the items reflect the actual order they are displayed in the menu."
)]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) enum MenuItem {
    /// This variant is used to throw a new round.
    PlayRound,
    /// This variant is used to show both running scores without playing.
    ShowScores,
    /// This variant is used to change the score that ends the match.
    SetTarget,
    /// This variant is used to zero the scores and start the match over.
    Restart,
    /// This variant is used to leave the game after printing the final scores.
    Exit,
}

impl MenuItem {
    /// This function returns all the enum variants, in the order they are listed on screen.
    pub(crate) const fn list() -> [Self; 5] {
        [
            Self::PlayRound,
            Self::ShowScores,
            Self::SetTarget,
            Self::Restart,
            Self::Exit,
        ]
    }

    /// This function returns the label shown for the entry.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::PlayRound => "Play a new round",
            Self::ShowScores => "Show the scores",
            Self::SetTarget => "Set the target score",
            Self::Restart => "Restart the game",
            Self::Exit => "Exit",
        }
    }
}
