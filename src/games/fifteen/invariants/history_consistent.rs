//! History consistency invariant: applied moves match filled cells.

use super::super::{GameInProgress, Square};
use super::Invariant;

/// Invariant: the number of applied moves equals the number of filled cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let filled = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        game.history().len() == filled
    }

    fn description() -> &'static str {
        "History length matches number of filled cells"
    }
}
