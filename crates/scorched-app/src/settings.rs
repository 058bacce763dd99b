//! Launch configuration: session settings plus the player roster, loaded
//! from a JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use scorched_core::constants::{MAX_PLAYERS, MIN_PLAYFIELD_SIZE};
use scorched_sim::SessionConfig;

use crate::roster::{default_roster, BotSpec};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid launch config: {0}")]
    Invalid(String),
}

/// Everything needed to start a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub session: SessionConfig,
    pub players: Vec<BotSpec>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            players: default_roster(),
        }
    }
}

impl LaunchConfig {
    pub fn from_json(text: &str, path: &Path) -> Result<Self, SettingsError> {
        serde_json::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Catch mistakes before the session is built.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let count = self.players.len();
        if !(2..=MAX_PLAYERS).contains(&count) {
            return Err(SettingsError::Invalid(format!(
                "roster has {} players, expected 2 to {}",
                count, MAX_PLAYERS
            )));
        }
        if self.session.tanks_per_player == 0 {
            return Err(SettingsError::Invalid("tanks_per_player must be at least 1".into()));
        }
        if self.session.width < MIN_PLAYFIELD_SIZE || self.session.height < MIN_PLAYFIELD_SIZE {
            return Err(SettingsError::Invalid(format!(
                "playfield {}x{} is smaller than {}",
                self.session.width, self.session.height, MIN_PLAYFIELD_SIZE
            )));
        }
        Ok(())
    }
}

/// Read and parse a launch config file.
pub fn load(path: &Path) -> Result<LaunchConfig, SettingsError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    LaunchConfig::from_json(&text, path)
}
