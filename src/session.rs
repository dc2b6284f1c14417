//! Console session: mode menu, games, save and replay prompts.

use crate::config::GameConfig;
use crate::console::{InputClosed, SharedConsole};
use crate::games::fifteen::{GameFinished, Mark};
use crate::orchestrator::Orchestrator;
use crate::players::{HumanPlayer, Player, RandomPlayer};
use crate::save;
use anyhow::Result;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Who plays against whom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    clap::ValueEnum,
)]
pub enum GameMode {
    /// Two humans sharing the console.
    #[strum(to_string = "Human vs human")]
    #[value(name = "human")]
    HumanVsHuman,
    /// A human (X) against the random computer player (O).
    #[strum(to_string = "Human vs computer")]
    #[value(name = "computer")]
    HumanVsComputer,
}

/// A run of one or more games on one console.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    console: SharedConsole,
    games_played: u32,
}

impl Session {
    /// Creates a session.
    pub fn new(config: GameConfig, console: SharedConsole) -> Self {
        Self {
            config,
            console,
            games_played: 0,
        }
    }

    /// Number of games finished in this session.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Plays games until the user declines a replay.
    ///
    /// The mode is asked for once unless given. Running out of input ends
    /// the session quietly.
    #[instrument(skip(self))]
    pub fn run(&mut self, mode: Option<GameMode>) -> Result<()> {
        match self.play_all(mode) {
            Err(err) if err.downcast_ref::<InputClosed>().is_some() => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn play_all(&mut self, mode: Option<GameMode>) -> Result<()> {
        let mode = match mode {
            Some(mode) => mode,
            None => self.choose_mode()?,
        };

        loop {
            let finished = self.play_once(mode)?;
            self.offer_save(&finished)?;

            let again = self.console.borrow_mut().confirm("Play again? (y/n): ")?;
            if again != Some(true) {
                break;
            }
        }

        self.console.borrow_mut().say("Thanks for playing!")?;
        Ok(())
    }

    /// Asks which mode to play.
    #[instrument(skip(self))]
    pub fn choose_mode(&mut self) -> Result<GameMode> {
        let mut console = self.console.borrow_mut();
        console.say("Select a game mode:")?;
        for (i, mode) in GameMode::iter().enumerate() {
            console.say(format!("  {}. {}", i + 1, mode))?;
        }

        let count = GameMode::iter().count() as u8;
        let choice = console
            .ask_number(&format!("Mode (1-{}): ", count), 1..=count)?
            .ok_or(InputClosed)?;
        let mode = GameMode::iter()
            .nth(usize::from(choice - 1))
            .ok_or_else(|| anyhow::anyhow!("No mode {}", choice))?;
        info!(%mode, "Mode selected");
        Ok(mode)
    }

    /// Plays a single game in the given mode.
    #[instrument(skip(self))]
    pub fn play_once(&mut self, mode: GameMode) -> Result<GameFinished> {
        let (player_x, player_o) = self.players(mode);
        let finished = Orchestrator::new(player_x, player_o, self.console.clone()).run()?;
        self.games_played += 1;
        Ok(finished)
    }

    fn players(&self, mode: GameMode) -> (Box<dyn Player>, Box<dyn Player>) {
        let human_x: Box<dyn Player> = Box::new(HumanPlayer::new(
            self.config.player_one().clone(),
            Mark::X,
            self.console.clone(),
        ));

        let player_o: Box<dyn Player> = match mode {
            GameMode::HumanVsHuman => Box::new(HumanPlayer::new(
                self.config.player_two().clone(),
                Mark::O,
                self.console.clone(),
            )),
            GameMode::HumanVsComputer => {
                let name = self.config.computer_name().clone();
                // Offset by game count so replays with a fixed seed differ.
                match self.config.seed() {
                    Some(seed) => Box::new(RandomPlayer::with_seed(
                        name,
                        Mark::O,
                        seed.wrapping_add(u64::from(self.games_played)),
                    )),
                    None => Box::new(RandomPlayer::new(name, Mark::O)),
                }
            }
        };

        (human_x, player_o)
    }

    /// Offers to save the finished game's moves.
    ///
    /// A bad path is reported and the save skipped; the session goes on.
    #[instrument(skip(self, finished))]
    pub fn offer_save(&mut self, finished: &GameFinished) -> Result<Option<PathBuf>> {
        let mut console = self.console.borrow_mut();
        if console.confirm("Save move history? (y/n): ")? != Some(true) {
            return Ok(None);
        }

        let prompt = match self.config.save_path() {
            Some(default) => format!("File path [{}]: ", default.display()),
            None => "File path: ".to_string(),
        };
        let answer = console.ask(&prompt)?.ok_or(InputClosed)?;
        let path = match (answer.is_empty(), self.config.save_path()) {
            (true, Some(default)) => default.clone(),
            _ => PathBuf::from(answer),
        };

        match save::write_history(&path, finished.moves()) {
            Ok(()) => {
                let count = finished.moves().len();
                console.say(format!("Saved {} moves to {}.", count, path.display()))?;
                Ok(Some(path))
            }
            Err(err) => {
                warn!(error = %err, "Save skipped");
                console.say(format!("Could not save: {}", err.message))?;
                Ok(None)
            }
        }
    }
}
