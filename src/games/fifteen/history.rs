//! Undo/redo bookkeeping for applied moves.

use super::action::Move;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Two stacks of moves: applied (undo) and undone (redo).
///
/// The top of each stack is the end of its `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly applied move. Any redo chain is discarded.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub fn record(&mut self, mov: Move) {
        if !self.redo.is_empty() {
            debug!(discarded = self.redo.len(), "New move invalidates redo chain");
            self.redo.clear();
        }
        self.undo.push(mov);
    }

    /// Takes back the most recent move, making it available to redo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let mov = self.undo.pop()?;
        self.redo.push(mov.clone());
        Some(mov)
    }

    /// Re-applies the most recently undone move.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Option<Move> {
        let mov = self.redo.pop()?;
        self.undo.push(mov.clone());
        Some(mov)
    }

    /// Applied moves, oldest first.
    pub fn applied(&self) -> &[Move] {
        &self.undo
    }

    /// Undone moves, most recently undone last.
    pub fn undone(&self) -> &[Move] {
        &self.redo
    }

    /// Whether there is a move to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of applied moves.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// Whether no move has been applied.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }
}
