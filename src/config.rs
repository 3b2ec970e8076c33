use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Display settings, read from a RON file such as
///
/// ```text
/// (descending: true, highlight_winner: false)
/// ```
///
/// Missing fields keep their defaults.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub descending: bool,
    pub highlight_winner: bool,
    pub show_coordinates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descending: false,
            highlight_winner: true,
            show_coordinates: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl Config {
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&s)
    }
}
