//! Turn loop between two players.

use crate::console::SharedConsole;
use crate::games::fifteen::rules::winning_line;
use crate::games::fifteen::{GameFinished, GameResult, GameSetup, Mark, Outcome};
use crate::players::Player;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Orchestrates a game between two players.
///
/// `X` always moves first. The grid is printed after every applied move.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    console: SharedConsole,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        console: SharedConsole,
    ) -> Self {
        debug_assert_eq!(player_x.mark(), Mark::X);
        debug_assert_eq!(player_o.mark(), Mark::O);
        Self {
            player_x,
            player_o,
            console,
        }
    }

    /// Runs one game to completion.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameFinished> {
        info!("Starting game");
        self.console.borrow_mut().say(format!(
            "{} (X, odd) vs {} (O, even). First line to sum to 15 wins.",
            self.player_x.name(),
            self.player_o.name()
        ))?;

        let mut game = GameSetup::new().start(Mark::X);

        loop {
            let player = match game.to_move() {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let mov = player.choose_move(&game)?;
            let announcement = format!("{}", mov);

            let result = game.make_move(mov)?;

            let mut console = self.console.borrow_mut();
            console.say(&announcement)?;

            match result {
                GameResult::InProgress(next) => {
                    console.say(next.board())?;
                    game = next;
                }
                GameResult::Finished(finished) => {
                    console.say(finished.board())?;
                    match finished.outcome() {
                        Outcome::Winner(mark) => {
                            let name = finished.winner_name().unwrap_or("Unknown");
                            let line = winning_line(finished.board())
                                .map(|line| {
                                    line.iter()
                                        .map(ToString::to_string)
                                        .collect::<Vec<_>>()
                                        .join(" ")
                                })
                                .unwrap_or_default();
                            info!(winner = %name, %mark, "Game won");
                            console.say(format!("{} ({}) wins! Line: {}", name, mark, line))?;
                        }
                        Outcome::Draw => {
                            info!("Game drawn");
                            console.say("The grid is full. It's a draw.")?;
                        }
                    }
                    return Ok(finished);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Console, Transcript};
    use crate::games::fifteen::{Digit, GameInProgress, Move, Position};

    /// Plays a fixed list of (index, value) moves.
    struct Scripted {
        name: &'static str,
        mark: Mark,
        moves: std::vec::IntoIter<(usize, u8)>,
    }

    impl Player for Scripted {
        fn choose_move(&mut self, _game: &GameInProgress) -> Result<Move> {
            let (index, value) = self
                .moves
                .next()
                .ok_or_else(|| anyhow::anyhow!("Out of moves"))?;
            Ok(Move::new(
                self.name,
                self.mark,
                Position::from_index(index).unwrap(),
                Digit::new(value)?,
            ))
        }

        fn name(&self) -> &str {
            self.name
        }

        fn mark(&self) -> Mark {
            self.mark
        }
    }

    fn scripted(name: &'static str, mark: Mark, moves: Vec<(usize, u8)>) -> Box<dyn Player> {
        Box::new(Scripted {
            name,
            mark,
            moves: moves.into_iter(),
        })
    }

    #[test]
    fn test_diagonal_win_reports_winner() {
        let transcript = Transcript::new();
        let console = Console::scripted("", transcript.clone()).shared();
        let x = scripted("Xena", Mark::X, vec![(0, 7), (4, 1), (8, 7)]);
        let o = scripted("Otto", Mark::O, vec![(1, 2), (2, 2)]);

        let finished = Orchestrator::new(x, o, console).run().unwrap();

        assert_eq!(finished.outcome(), &Outcome::Winner(Mark::X));
        assert_eq!(finished.winner_name(), Some("Xena"));
        assert_eq!(finished.moves().len(), 5);
        let out = transcript.contents();
        assert!(out.contains("Xena (X) wins!"));
        assert!(out.contains("7\t2\t2"));
    }

    #[test]
    fn test_full_grid_without_fifteen_is_a_draw() {
        let transcript = Transcript::new();
        let console = Console::scripted("", transcript.clone()).shared();
        let x = scripted("A", Mark::X, vec![(0, 1), (4, 1), (8, 1), (3, 1), (7, 1)]);
        let o = scripted("B", Mark::O, vec![(1, 2), (2, 2), (5, 2), (6, 2)]);

        let finished = Orchestrator::new(x, o, console).run().unwrap();

        assert!(finished.outcome().is_draw());
        let out = transcript.contents();
        assert_eq!(out.matches("places").count(), 9);
        assert!(out.contains("draw"));
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let console = Console::scripted("", Transcript::new()).shared();
        let x = scripted("A", Mark::X, vec![(0, 1)]);
        let o = scripted("B", Mark::O, vec![(0, 2)]);

        let err = Orchestrator::new(x, o, console).run().unwrap_err();
        assert!(err.to_string().contains("already occupied"));
    }
}
