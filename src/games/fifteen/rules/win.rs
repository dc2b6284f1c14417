//! Win detection: any line summing to exactly fifteen.

use super::super::{Board, Position};
use tracing::instrument;

/// The sum a line must reach to win.
pub const TARGET_SUM: u32 = 15;

const fn at(row: usize, col: usize) -> Position {
    Position::ALL[row * 3 + col]
}

/// The 8 lines of the grid.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the first line summing to exactly fifteen, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| board.sum_line(line) == TARGET_SUM)
}

/// Checks whether any row, column, or diagonal sums to exactly fifteen.
///
/// A line counts even if it is not full: empty cells contribute 0.
#[instrument(skip(board))]
pub fn has_win(board: &Board) -> bool {
    winning_line(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::super::super::Digit;
    use super::*;

    fn board_with(cells: &[(usize, usize, u8)]) -> Board {
        let mut board = Board::new();
        for &(row, col, value) in cells {
            board.place(at(row, col), Digit::new(value).unwrap());
        }
        board
    }

    #[test]
    fn test_no_win_empty_board() {
        assert!(!has_win(&Board::new()));
    }

    #[test]
    fn test_row_summing_to_fifteen_wins() {
        let board = board_with(&[(0, 0, 8), (0, 1, 4), (0, 2, 3)]);
        assert!(has_win(&board));
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_row_summing_to_six_does_not_win() {
        let board = board_with(&[(0, 0, 1), (0, 1, 2), (0, 2, 3)]);
        assert!(!has_win(&board));
    }

    #[test]
    fn test_column_and_anti_diagonal() {
        let column = board_with(&[(0, 1, 9), (1, 1, 5), (2, 1, 1)]);
        assert!(has_win(&column));

        let anti = board_with(&[(0, 2, 2), (1, 1, 6), (2, 0, 7)]);
        assert_eq!(winning_line(&anti), Some(LINES[7]));
    }

    #[test]
    fn test_two_cells_can_reach_fifteen() {
        let board = board_with(&[(2, 0, 9), (2, 2, 6)]);
        assert!(has_win(&board));
    }

    #[test]
    fn test_overshoot_does_not_win() {
        let board = board_with(&[(1, 0, 9), (1, 1, 9), (1, 2, 9)]);
        assert!(!has_win(&board));
    }
}
