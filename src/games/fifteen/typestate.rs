//! Phase-specific typestate structs for numeric tic-tac-toe.
//!
//! Each phase is its own type. A `GameFinished` always has an outcome,
//! and only a `GameInProgress` accepts moves.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::history::MoveHistory;
use super::phases::Outcome;
use super::{Board, Mark, Position};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - empty grid, ready to start.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the first mover.
    #[instrument(skip(self))]
    pub fn start(self, first_mover: Mark) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: MoveHistory::new(),
            to_move: first_mover,
            first_mover,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game awaiting a move from `to_move`.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(super) board: Board,
    pub(super) history: MoveHistory,
    pub(super) to_move: Mark,
    pub(super) first_mover: Mark,
}

impl GameInProgress {
    /// Applies a move, consuming self and transitioning to the next state.
    ///
    /// Preconditions are always checked; postconditions only in debug
    /// builds.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.place(action.position(), action.value());
        game.history.record(action);

        if super::rules::has_win(&game.board) {
            info!(winner = %game.to_move, "Line of fifteen completed");
            return Ok(GameResult::Finished(GameFinished {
                outcome: Outcome::Winner(game.to_move),
                board: game.board,
                history: game.history,
            }));
        }

        if super::rules::is_full(&game.board) {
            info!("Grid full without a line of fifteen");
            return Ok(GameResult::Finished(GameFinished {
                outcome: Outcome::Draw,
                board: game.board,
                history: game.history,
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Takes back the most recent move and hands the turn back to its maker.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let mov = self.history.undo()?;
        self.board.clear(mov.position());
        self.to_move = mov.mark();
        debug!(mov = %mov, "Move undone");
        Some(mov)
    }

    /// Re-applies the most recently undone move.
    ///
    /// A redo chain only exists while no new move has been made, so the
    /// redone move never completes a line: it was not a winning move the
    /// first time.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Option<Move> {
        let mov = self.history.redo()?;
        self.board.place(mov.position(), mov.value());
        self.to_move = mov.mark().opponent();
        debug!(mov = %mov, "Move redone");
        Some(mov)
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns who moved first.
    pub fn first_mover(&self) -> Mark {
        self.first_mover
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the undo/redo history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns the empty cells.
    #[instrument(skip(self))]
    pub fn open_cells(&self) -> Vec<Position> {
        Position::open_cells(&self.board)
    }

    /// Replays moves from an empty grid.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(first_mover: Mark, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start(first_mover);

        for action in moves {
            match game.make_move(action.clone())? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: MoveHistory,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the applied moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        self.history.applied()
    }

    /// Returns the move that ended the game.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.applied().last()
    }

    /// Name of the winning player, if the game was won.
    pub fn winner_name(&self) -> Option<&str> {
        self.outcome
            .winner()
            .and_then(|_| self.last_move())
            .map(Move::player)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
