//! Numeric tic-tac-toe: place digits 1-9, win with a line of fifteen.

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use history::MoveHistory;
pub use phases::Outcome;
pub use position::Position;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{Board, Digit, Mark, Square};
