//! Engine and game configuration, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::transposition_table::TABLE_MAX_SIZE;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "connect4.toml";

/// AI strength tiers
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Base search depth before adaptive adjustment
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 7,
        }
    }

    /// Maps a 1-indexed menu choice; anything past the last tier is `Expert`
    pub fn from_choice(choice: u32) -> Self {
        match choice {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            _ => Difficulty::Expert,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// First line of four wins
    Classic,
    /// Play until the board is full, most lines wins
    ScoreAttack,
}

impl GameMode {
    pub fn is_score_attack(self) -> bool {
        self == GameMode::ScoreAttack
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Human,
    Ai,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Transposition cache entries kept before a full clear
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: TABLE_MAX_SIZE,
        }
    }
}

/// Top-level configuration. Preset game options skip the matching prompt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub mode: Option<GameMode>,
    pub opponent: Option<Opponent>,
    pub difficulty: Option<Difficulty>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads the file if it exists, otherwise returns the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "engine.cache_capacity must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
