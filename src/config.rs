//! Application settings, read from a JSON file. Every field has a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::inventory::{LowStockAlerts, DEFAULT_INVENTORY_KEY};
use crate::session::{DEFAULT_PASSWORD, DEFAULT_SESSION_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory used by the file-backed storage.
    pub storage_dir: PathBuf,
    pub session_key: String,
    pub inventory_key: String,
    /// Shared secret accepted by the login gate.
    pub password: String,
    pub low_stock_alerts: LowStockAlerts,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_dir: PathBuf::from(".padoca"),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            inventory_key: DEFAULT_INVENTORY_KEY.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            low_stock_alerts: LowStockAlerts::default(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
