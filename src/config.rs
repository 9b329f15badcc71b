//! App configuration
//!
//! Read from `<config_dir>/split-bill/config.json`, or from the file named
//! by `SPLIT_BILL_CONFIG`:
//! - Linux: ~/.config/split-bill/config.json
//! - macOS: ~/Library/Application Support/split-bill/config.json
//! - Windows: %APPDATA%\split-bill\config.json
//!
//! Every field is optional. A missing file means defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::state::data::Friend;

/// Environment variable overriding the config path
pub const CONFIG_ENV: &str = "SPLIT_BILL_CONFIG";

pub const DEFAULT_IMAGE_URL: &str = "https://i.pravatar.cc/48?u=499476";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// What the add-friend image field starts with and resets to
    pub default_image_url: String,
    /// Appended to amounts in the friend list
    pub currency_symbol: String,
    /// Friends present at startup
    pub friends: Vec<Friend>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
            currency_symbol: "₹".to_string(),
            friends: default_friends(),
        }
    }
}

fn default_friends() -> Vec<Friend> {
    [(118836, "Clark", -7), (933372, "Sarah", 20), (499476, "Anthony", 0)]
        .into_iter()
        .map(|(id, name, balance)| {
            Friend::new(id, name, format!("https://i.pravatar.cc/48?u={}", id))
                .with_balance(Decimal::from(balance))
        })
        .collect()
}

impl Config {
    /// Load the config, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            warn!("could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!("📁 loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }

    /// Where the config file lives
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("split-bill");
        path.push("config.json");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
