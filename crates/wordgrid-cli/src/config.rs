//! Optional user defaults read from `<config_dir>/wordgrid/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use wordgrid_core::{Difficulty, GameType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub game_type: GameType,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            game_type: GameType::WordSearch,
            difficulty: None,
            seed: None,
            color: true,
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub game_type: Option<GameType>,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
    pub no_color: bool,
}

impl CliConfig {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordgrid")
            .join("config.json")
    }

    /// Load the config file; a missing or malformed file yields defaults
    pub fn load() -> Self {
        match fs::read_to_string(Self::path()) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("ignoring malformed config: {}", e);
            Self::default()
        })
    }

    /// Apply command-line overrides
    pub fn merge(mut self, overrides: &Overrides) -> Self {
        if let Some(game_type) = overrides.game_type {
            self.game_type = game_type;
        }
        if overrides.difficulty.is_some() {
            self.difficulty = overrides.difficulty;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }
}
