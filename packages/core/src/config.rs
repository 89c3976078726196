//! Sync settings
//!
//! Persisted as a small JSON file by the host application. Unknown or
//! missing fields fall back to their defaults so older settings files keep
//! loading after upgrades.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-facing knobs of the sync engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// API token for the remote service. Consumed by the concrete client
    /// implementation, never by the engine itself.
    pub api_token: String,

    /// Language code forwarded with due-date expressions, e.g. "en".
    pub due_lang: String,

    /// Whether the host application should run a sync pass on load.
    pub sync_on_load: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            due_lang: "en".to_string(),
            sync_on_load: true,
        }
    }
}

impl SyncSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
