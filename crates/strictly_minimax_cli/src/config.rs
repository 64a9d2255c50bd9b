//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Player;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_minimax.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Mark played by the human.
    #[serde(default = "default_human")]
    human: Player,

    /// Whether the engine makes the opening move.
    #[serde(default)]
    engine_first: bool,

    /// Log filter used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    log_level: String,

    /// Show cell numbers on empty squares.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

fn default_human() -> Player {
    Player::X
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            engine_first: false,
            log_level: default_log_level(),
            show_hints: default_show_hints(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit file, or the default file if it exists, or
    /// falls back to defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        human: Option<Player>,
        engine_first: bool,
        log_level: Option<String>,
    ) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self.engine_first |= engine_first;
        if let Some(log_level) = log_level {
            self.log_level = log_level;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
