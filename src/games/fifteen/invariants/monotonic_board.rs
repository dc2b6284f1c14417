//! Monotonic grid invariant: cells never change once set.

use super::super::{Board, GameInProgress};
use super::Invariant;

/// Invariant: a filled cell keeps its value.
///
/// Verified by replaying the applied moves onto an empty grid and
/// comparing. Undo pops from the applied moves, so an undone cell is
/// expected to be empty again.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history().applied() {
            if !reconstructed.is_empty(mov.position()) {
                return false;
            }
            reconstructed.place(mov.position(), mov.value());
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Grid cells are monotonic (never overwritten)"
    }
}
