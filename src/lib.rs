//! Strictly Fifteen - numeric tic-tac-toe
//!
//! Players take turns writing a digit from 1 to 9 into an empty cell of a
//! 3x3 grid. The first move that makes any row, column or diagonal sum to
//! exactly 15 wins.
//!
//! # Architecture
//!
//! - **Games**: grid, validation, win rules and the typestate turn machine
//! - **Players**: interactive (console) and randomized strategies
//! - **Orchestrator**: the turn loop between two players
//! - **Session**: mode menu, save and replay prompts
//! - **Save**: plain-text move history files
//!
//! # Example
//!
//! ```
//! use strictly_fifteen::{Digit, GameResult, GameSetup, Mark, Move, Position, has_win};
//!
//! let game = GameSetup::new().start(Mark::X);
//! let mov = Move::new("Ada", Mark::X, Position::new(1, 1).unwrap(), Digit::new(5).unwrap());
//! let GameResult::InProgress(game) = game.make_move(mov).unwrap() else {
//!     unreachable!("one move cannot reach fifteen");
//! };
//! assert!(!has_win(game.board()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;
mod orchestrator;
mod players;
mod save;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console ports
pub use console::{Console, InputClosed, SharedConsole, Transcript};

// Crate-level exports - Game types
pub use games::fifteen::contracts::{
    CellIsEmpty, Contract, LegalMove, MoveContract, PlayersTurn, ValueInRange, validate,
};
pub use games::fifteen::invariants::{
    AlternatingTurnInvariant, FifteenInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use games::fifteen::rules::{LINES, TARGET_SUM, has_win, is_draw, is_full, winning_line};
pub use games::fifteen::{
    Board, Digit, GameFinished, GameInProgress, GameResult, GameSetup, Mark, Move, MoveError,
    MoveHistory, Outcome, Position, Square,
};

// Crate-level exports - Players and orchestration
pub use orchestrator::Orchestrator;
pub use players::{HumanPlayer, Player, RandomPlayer};

// Crate-level exports - Session and save files
pub use save::{SaveError, format_move, parse_line, read_history, write_history};
pub use session::{GameMode, Session};
