//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::games::fifteen::{GameInProgress, Mark, Move};
use anyhow::Result;

/// Anything that can produce a move for the current grid.
///
/// Implementations retry internally until they have a move targeting an
/// empty cell; the orchestrator never sees an invalid one.
pub trait Player {
    /// Chooses the next move for this player's mark.
    fn choose_move(&mut self, game: &GameInProgress) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the player's mark.
    fn mark(&self) -> Mark;
}
