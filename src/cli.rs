//! Command-line interface for fifteen.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_fifteen::GameMode;

/// Fifteen - numeric tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "fifteen")]
#[command(about = "Place digits 1-9; the first line summing to 15 wins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive games
    Play {
        /// Game mode; asked for interactively when omitted
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the computer player
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay a saved move history and show the final grid
    Show {
        /// Save file written at the end of a game
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            mode: None,
            config: None,
            seed: None,
        }
    }
}
