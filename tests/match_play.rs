//! Whole matches played through the public library API.

#![expect(
    unused_crate_dependencies,
    reason = "Integration tests only need the library and its dice."
)]

use std::collections::VecDeque;

use diceduel::{
    score, DiceSource, GameError, Outcome, Phase, Roll, Seat, Session, TargetScore,
    DEFAULT_TARGET,
};
use fastrand::Rng;

/// Plays back known rolls in order.
struct Loaded(VecDeque<Roll>);

impl Loaded {
    fn new(rolls: &[[u8; 4]]) -> Self {
        Self(
            rolls
                .iter()
                .map(|&faces| Roll::try_from(faces).expect("faces are on the die"))
                .collect(),
        )
    }
}

impl DiceSource for Loaded {
    fn throw(&mut self) -> Roll {
        self.0.pop_front().expect("ran out of loaded rolls")
    }
}

/// Running totals of one seat, kept alongside the session to check its bookkeeping.
#[derive(Default)]
struct Tally {
    points: u32,
    rounds: u32,
}

#[test]
fn seeded_match_runs_to_a_winner() {
    let mut session = Session::with_dice(Rng::with_seed(2024));
    let mut tallies = [Tally::default(), Tally::default()];

    let champion = loop {
        let outcome = session.play_round().expect("match still open");
        for (tally, seat) in tallies.iter_mut().zip(Seat::BOTH) {
            let turn = outcome.turn(seat);
            assert_eq!(
                score(&turn.scoring_roll()),
                Outcome::Points(turn.points()),
                "{seat} ended the turn on a scoring roll"
            );
            for roll in turn.rerolls() {
                assert_eq!(
                    score(roll),
                    Outcome::RerollRequired,
                    "{seat} only rerolled non-scoring rolls"
                );
            }
            tally.points += turn.points();
            if outcome.winner() == Some(seat) {
                tally.rounds += 1;
            }
        }
        if let Some(seat) = outcome.match_winner() {
            break seat;
        }
        assert_eq!(session.phase(), Phase::AwaitingAction, "match goes on");
    };

    assert_eq!(session.phase(), Phase::MatchWon, "match is won");
    assert!(
        session.player(champion).total_score() >= DEFAULT_TARGET,
        "champion reached the target"
    );
    if champion == Seat::Second {
        assert!(
            session.player(Seat::First).total_score() < DEFAULT_TARGET,
            "the first seat would have been checked first"
        );
    }
    for (tally, seat) in tallies.iter().zip(Seat::BOTH) {
        assert_eq!(session.player(seat).total_score(), tally.points, "{seat} total");
        assert_eq!(session.player(seat).rounds_won(), tally.rounds, "{seat} rounds");
    }
    assert_eq!(session.play_round(), Err(GameError::MatchOver), "no round after a win");
}

#[test]
fn same_seed_same_match() {
    let play = |seed| {
        let mut session = Session::with_dice(Rng::with_seed(seed))
            .with_target(TargetScore::try_from(1_000_i64).expect("positive"));
        (0..5)
            .map(|_| session.play_round().expect("the target is out of reach"))
            .collect::<Vec<_>>()
    };

    assert_eq!(play(99), play(99), "equal seeds replay the same rounds");
}

#[test]
fn loaded_dice_decide_the_match() {
    let mut session = Session::with_dice(Loaded::new(&[
        // round 1: 18 against a reroll then 7
        [6, 6, 6, 6],
        [1, 2, 3, 4],
        [3, 3, 1, 6],
        // round 2: 10 against 17
        [5, 5, 2, 2],
        [5, 5, 5, 5],
    ]))
    .with_target(TargetScore::try_from(24_i64).expect("positive"));

    let first = session.play_round().expect("round one");
    assert_eq!(first.winner(), Some(Seat::First), "18 beats 7");
    assert_eq!(first.turn(Seat::Second).rerolls().len(), 1, "one reroll");
    assert_eq!(first.match_winner(), None, "nobody has 24 yet");

    let second = session.play_round().expect("round two");
    assert_eq!(second.winner(), Some(Seat::Second), "17 beats 10");
    assert_eq!(second.match_winner(), Some(Seat::First), "both reach 24, first seat wins");
    assert_eq!(session.player(Seat::First).total_score(), 28, "18 + 10");
    assert_eq!(session.player(Seat::Second).total_score(), 24, "7 + 17");
    assert_eq!(session.player(Seat::First).rounds_won(), 1, "first seat rounds");
    assert_eq!(session.player(Seat::Second).rounds_won(), 1, "second seat rounds");
    assert_eq!(session.check_winner(), Some(Seat::First), "first seat first");
}

#[test]
fn raising_the_target_after_a_win_lets_play_continue() {
    let mut session = Session::with_dice(Loaded::new(&[[6, 6, 6, 6], [1, 1, 2, 3], [3, 3, 3, 3], [4, 4, 1, 2]]))
        .with_target(TargetScore::try_from(18_i64).expect("positive"));
    let won = session.play_round().expect("round one");
    assert_eq!(won.match_winner(), Some(Seat::First), "18 reaches 18");

    session.set_target(40).expect("positive");

    assert_eq!(session.check_winner(), None, "nobody has 40");
    assert_eq!(session.phase(), Phase::AwaitingAction, "match is open again");
    let next = session.play_round().expect("match is open again");
    assert_eq!(next.match_winner(), None, "33 is short of 40");
    assert_eq!(session.player(Seat::First).total_score(), 33, "18 + 15");
}
