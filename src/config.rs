//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Names, seed and save defaults for a session.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the first human player (X).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the second human player (O) in human vs human games.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Name of the computer player (O) in human vs computer games.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Seed for the computer player. Unset means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Save path used when the save prompt is answered with an empty line.
    #[serde(default)]
    save_path: Option<PathBuf>,
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            computer_name: default_computer_name(),
            seed: None,
            save_path: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        for (key, name) in [
            ("player_one", &config.player_one),
            ("player_two", &config.player_two),
            ("computer_name", &config.computer_name),
        ] {
            if name.contains(['\n', '\r']) {
                return Err(ConfigError::new(format!(
                    "{} must be a single line, got {:?}",
                    key, name
                )));
            }
        }

        info!(player_one = %config.player_one, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
