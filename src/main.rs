//! Fifteen - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_fifteen::{
    Console, GameConfig, GameInProgress, GameMode, GameResult, Mark, Session, read_history,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { mode, config, seed } => run_play(mode, config, seed),
        Command::Show { path } => run_show(path),
    }
}

/// Logs go to stderr so the game transcript on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run interactive games on stdin/stdout
#[instrument]
fn run_play(mode: Option<GameMode>, config: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_seed(seed);

    info!(?mode, "Starting session");
    let mut session = Session::new(config, Console::stdio().shared());
    session.run(mode)?;
    info!(games = session.games_played(), "Session finished");
    Ok(())
}

/// Print a saved game's moves and final grid
#[instrument]
fn run_show(path: PathBuf) -> Result<()> {
    let moves = read_history(&path, Mark::X)?;
    let mut console = Console::stdio();

    for mov in &moves {
        console.say(mov)?;
    }

    match GameInProgress::replay(Mark::X, &moves)? {
        GameResult::Finished(finished) => {
            console.say(finished.board())?;
            console.say(finished.outcome())?;
        }
        GameResult::InProgress(game) => {
            console.say(game.board())?;
            console.say(format!("Unfinished: {} to move", game.to_move()))?;
        }
    }
    Ok(())
}
