//! First-class move events for numeric tic-tac-toe.
//!
//! A move carries who made it and when, so the history can be
//! exported without consulting the players again.

use super::{Digit, Mark, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing a value into a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Display name of the player who made the move.
    player: String,
    /// Marker of the player who made the move.
    mark: Mark,
    /// Target cell.
    position: Position,
    /// Value placed.
    value: Digit,
    /// When the move was made.
    timestamp: DateTime<Utc>,
}

impl Move {
    /// Creates a move stamped with the current time.
    #[instrument(skip(player), fields(player = %player.as_ref()))]
    pub fn new(player: impl AsRef<str>, mark: Mark, position: Position, value: Digit) -> Self {
        Self::at(player, mark, position, value, Utc::now())
    }

    /// Creates a move with an explicit timestamp.
    pub fn at(
        player: impl AsRef<str>,
        mark: Mark,
        position: Position,
        value: Digit,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            player: player.as_ref().to_string(),
            mark,
            position,
            value,
            timestamp,
        }
    }

    /// Returns the name of the player who made this move.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Returns the mover's marker.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the target cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the value placed.
    pub fn value(&self) -> Digit {
        self.value
    }

    /// Returns when the move was made.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) places {} at {}",
            self.player, self.mark, self.value, self.position
        )
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a value.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The value is outside 1..=9.
    #[display("Value {} is out of range (must be 1-9)", _0)]
    ValueOutOfRange(u8),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
