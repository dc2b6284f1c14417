//! Contract-based validation for numeric tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{FifteenInvariants, InvariantSet};
use super::typestate::GameInProgress;
use super::{Board, Digit, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Validation
// ─────────────────────────────────────────────────────────────

/// Checks whether a value may be placed at `pos`.
///
/// Only emptiness is checked. The value's range is the input layer's
/// concern (see [`ValueInRange`]), so an out-of-range value on an empty
/// cell still validates.
#[instrument(skip(board))]
pub fn validate(board: &Board, pos: Position, value: u8) -> bool {
    board.is_empty(pos)
}

/// Precondition: the value is a placeable digit (1-9).
pub struct ValueInRange;

impl ValueInRange {
    /// Converts a raw value into a digit.
    pub fn check(value: u8) -> Result<Digit, MoveError> {
        Digit::new(value)
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the move's target cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if validate(game.board(), mov.position(), mov.value().get()) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position()))
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the move's mark against the player to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.mark() != game.to_move() {
            Err(MoveError::WrongPlayer(mov.mark()))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the cell is empty and it's the mover's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Cell must be empty
/// - Must be the mover's turn
///
/// Postconditions:
/// - Exactly one cell went from empty to filled
/// - Grid remains monotonic
/// - Players still alternate
/// - History remains consistent with the grid
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        let filled = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(old, new)| old != new)
            .count();
        if filled != 1 || after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected one new value, {} cells changed",
                filled
            )));
        }

        FifteenInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fifteen::{GameResult, GameSetup, Mark, Square};

    fn at(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn mv(mark: Mark, row: usize, col: usize, value: u8) -> Move {
        Move::new("Tester", mark, at(row, col), Digit::new(value).unwrap())
    }

    #[test]
    fn test_validate_ignores_value_range() {
        let mut board = Board::new();
        assert!(validate(&board, at(1, 1), 0));
        assert!(validate(&board, at(1, 1), 42));

        board.place(at(1, 1), Digit::new(5).unwrap());
        assert!(!validate(&board, at(1, 1), 3));
        assert!(!validate(&board, at(1, 1), 200));
    }

    #[test]
    fn test_value_in_range() {
        assert!(ValueInRange::check(0).is_err());
        assert!(ValueInRange::check(1).is_ok());
        assert!(ValueInRange::check(9).is_ok());
        assert_eq!(
            ValueInRange::check(10),
            Err(MoveError::ValueOutOfRange(10))
        );
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameSetup::new().start(Mark::X);
        let Ok(GameResult::InProgress(game)) = game.make_move(mv(Mark::X, 1, 1, 5)) else {
            panic!("Expected in-progress game");
        };
        assert_eq!(
            MoveContract::pre(&game, &mv(Mark::O, 1, 1, 2)),
            Err(MoveError::CellOccupied(at(1, 1)))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Mark::X);
        assert!(matches!(
            MoveContract::pre(&game, &mv(Mark::O, 0, 0, 2)),
            Err(MoveError::WrongPlayer(Mark::O))
        ));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start(Mark::X);
        let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(mv(Mark::X, 0, 0, 1))
        else {
            panic!("Expected in-progress game");
        };
        assert!(MoveContract::post(&game, &after).is_ok());

        after.board.place(at(2, 2), Digit::new(4).unwrap());
        assert_ne!(after.board.get(at(2, 2)), Square::Empty);
        assert!(MoveContract::post(&game, &after).is_err());
    }

    #[test]
    fn test_postcondition_rejects_unchanged_grid() {
        let game = GameSetup::new().start(Mark::X);
        let Ok(GameResult::InProgress(after)) = game.clone().make_move(mv(Mark::X, 0, 0, 1))
        else {
            panic!("Expected in-progress game");
        };

        let err = MoveContract::post(&after, &after).unwrap_err();
        assert!(err.to_string().contains("0 cells changed"));
    }
}
