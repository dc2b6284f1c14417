//! Human player prompting on the console.

use super::Player;
use crate::console::{InputClosed, SharedConsole};
use crate::games::fifteen::contracts::{ValueInRange, validate};
use crate::games::fifteen::{Digit, GameInProgress, Mark, Move, Position};
use anyhow::{Context, Result};
use derive_new::new;
use tracing::{debug, info, instrument};

/// Human player answering row, column and value prompts.
#[derive(Debug, new)]
pub struct HumanPlayer {
    name: String,
    mark: Mark,
    console: SharedConsole,
}

impl Player for HumanPlayer {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn choose_move(&mut self, game: &GameInProgress) -> Result<Move> {
        let mut console = self.console.borrow_mut();
        console.say(format!("{} ({}), your move.", self.name, self.mark))?;

        loop {
            let row = console
                .ask_number("Row (0-2): ", 0..=2)?
                .ok_or(InputClosed)?;
            let col = console
                .ask_number("Column (0-2): ", 0..=2)?
                .ok_or(InputClosed)?;
            let prompt = format!("Value ({}-{}): ", Digit::MIN, Digit::MAX);
            let value = console
                .ask_number(&prompt, Digit::MIN..=Digit::MAX)?
                .ok_or(InputClosed)?;

            let position = Position::new(usize::from(row), usize::from(col))
                .context("Row and column were range-checked")?;

            if !validate(game.board(), position, value) {
                debug!(%position, "Occupied cell chosen");
                console.say(format!("Cell {} is already taken. Try again.", position))?;
                continue;
            }

            let value = ValueInRange::check(value)?;
            info!(%position, %value, "Human chose move");
            return Ok(Move::new(&self.name, self.mark, position, value));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
