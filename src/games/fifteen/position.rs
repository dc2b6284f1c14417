//! Grid coordinates for numeric tic-tac-toe.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate with row and column both in 0..=2.
///
/// Out-of-range coordinates cannot be constructed, so every
/// `Position` indexes the grid safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Number of rows and columns.
    pub const SIZE: usize = 3;

    /// Creates a position, or `None` if either coordinate is out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < Self::SIZE && col < Self::SIZE).then_some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a position from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / Self::SIZE, index % Self::SIZE)
    }

    /// Row, 0-2.
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    /// Column, 0-2.
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Row-major index, 0-8.
    pub fn index(self) -> usize {
        self.row() * Self::SIZE + self.col()
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Filters positions by grid state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn open_cells(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
