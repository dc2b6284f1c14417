//! Core domain types for numeric tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's designated marker.
///
/// `X` moves first. The randomized strategy draws odd values for `X`
/// and even values for `O`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// First player, odd values.
    X,
    /// Second player, even values.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Values the randomized strategy may draw for this mark.
    pub fn preferred_values(self) -> &'static [u8] {
        match self {
            Mark::X => &[1, 3, 5, 7, 9],
            Mark::O => &[2, 4, 6, 8],
        }
    }
}

/// A cell value between 1 and 9.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Smallest placeable value.
    pub const MIN: u8 = 1;
    /// Largest placeable value.
    pub const MAX: u8 = 9;

    /// Creates a digit, rejecting values outside 1..=9.
    pub fn new(value: u8) -> Result<Self, MoveError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MoveError::ValueOutOfRange(value))
        }
    }

    /// Returns the numeric value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a value.
    Filled(Digit),
}

impl Square {
    /// Numeric value of the cell, 0 when empty.
    pub fn value(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Filled(digit) => digit.get(),
        }
    }
}

/// 3x3 grid of numeric cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Writes a value into a cell.
    ///
    /// Emptiness is the caller's responsibility; see `contracts::validate`.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.squares[pos.index()] = Square::Filled(digit);
    }

    /// Empties a cell. Only undo does this.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.squares[pos.index()] = Square::Empty;
    }

    /// Sums the values along a line of positions.
    pub fn sum_line(&self, line: &[Position; 3]) -> u32 {
        line.iter().map(|pos| u32::from(self.get(*pos).value())).sum()
    }

    /// Returns all cells as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Renders the grid: tab-separated cells, `-` for empty.
    pub fn render(&self) -> String {
        self.squares
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => "-".to_string(),
                        Square::Filled(digit) => digit.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Position {
        Position::new(row, col).expect("in range")
    }

    #[test]
    fn test_digit_bounds() {
        assert!(Digit::new(0).is_err());
        assert!(Digit::new(10).is_err());
        assert_eq!(Digit::new(9).map(Digit::get), Ok(9));
    }

    #[test]
    fn test_render_empty_and_filled() {
        let mut board = Board::new();
        board.place(at(0, 0), Digit::new(8).unwrap());
        board.place(at(2, 1), Digit::new(5).unwrap());
        assert_eq!(board.render(), "8\t-\t-\n-\t-\t-\n-\t5\t-");
    }

    #[test]
    fn test_sum_line_counts_empty_as_zero() {
        let mut board = Board::new();
        board.place(at(1, 0), Digit::new(6).unwrap());
        board.place(at(1, 2), Digit::new(7).unwrap());
        assert_eq!(board.sum_line(&[at(1, 0), at(1, 1), at(1, 2)]), 13);
    }

    #[test]
    fn test_preferred_values_split_by_parity() {
        assert!(Mark::X.preferred_values().iter().all(|v| v % 2 == 1));
        assert!(Mark::O.preferred_values().iter().all(|v| v % 2 == 0));
    }
}
