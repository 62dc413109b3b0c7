use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use crate::error::{PriorankError, Result};

/// Display preferences. Tasks are never stored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Show importance, urgency and the calculation column by default.
    #[serde(default)]
    pub show_all_columns: bool,
    /// Field separator for batch input lines.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    "|".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_all_columns: false,
            separator: default_separator(),
        }
    }
}

/// Returns the path to the config file.
///
/// The path is determined in the following order:
/// 1. `PRIORANK_CONFIG` environment variable.
/// 2. `~/.config/priorank/config.toml` (on Linux).
/// 3. `./priorank.toml` (fallback).
pub fn config_path() -> PathBuf {
    std::env::var("PRIORANK_CONFIG").map(PathBuf::from).unwrap_or_else(|_| {
        match dirs::config_dir() {
            Some(mut p) => {
                p.push("priorank");
                p.push("config.toml");
                p
            }
            None => PathBuf::from("priorank.toml"),
        }
    })
}

impl Config {
    /// Loads the config file, or defaults when it does not exist.
    pub fn load() -> Result<Config> {
        let path = config_path();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let s = fs::read_to_string(&path)?;
        let mut config: Config = toml::from_str(&s).map_err(|source| PriorankError::Config { path: path.clone(), source })?;
        if config.separator.is_empty() {
            log::warn!("empty separator in {}, using '|'", path.display());
            config.separator = default_separator();
        }
        Ok(config)
    }
}
