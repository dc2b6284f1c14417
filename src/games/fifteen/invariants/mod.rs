//! Properties of a game in progress that every legal move preserves.
//!
//! A filled cell never changes, `X` and `O` take turns, and the undo
//! stack agrees with the grid. `make_move` checks all three after each
//! move in debug builds; tests check them directly.

/// A property of `S` that legal play never breaks.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed, carrying its statement.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Statement of the broken property.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a property statement.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked as one.
///
/// Implemented for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Reports every failing member, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member),+> InvariantSet<S> for ($($member,)+)
        where
            $($member: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($member::holds(state), $member::description())),+]
                    .into_iter()
                    .filter(|(held, _)| !held)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// Everything checked after a move.
pub type FifteenInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fifteen::{
        Digit, GameInProgress, GameResult, GameSetup, Mark, Move, Position,
    };

    fn mv(mark: Mark, index: usize, value: u8) -> Move {
        Move::new(
            "Tester",
            mark,
            Position::from_index(index).unwrap(),
            Digit::new(value).unwrap(),
        )
    }

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let game = GameSetup::new().start(Mark::X);
        assert!(FifteenInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = vec![mv(Mark::X, 0, 1), mv(Mark::O, 4, 2), mv(Mark::X, 8, 3)];
        let Ok(GameResult::InProgress(game)) = GameInProgress::replay(Mark::X, &moves) else {
            panic!("Expected in-progress game");
        };
        assert!(FifteenInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_every_violation_is_reported() {
        let mut game = GameSetup::new().start(Mark::X);
        // A value with no recorded move breaks two properties at once.
        game.board.place(Position::from_index(4).unwrap(), Digit::new(5).unwrap());

        let violations = FifteenInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[1].to_string(),
            HistoryConsistentInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameSetup::new().start(Mark::O);
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
