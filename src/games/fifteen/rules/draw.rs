//! Draw detection: a full grid with no winning line.

use super::super::{Board, Square};
use super::win::has_win;
use tracing::instrument;

/// Checks if every cell holds a value.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is drawn.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_win(board)
}
