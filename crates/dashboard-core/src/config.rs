//! Dashboard configuration
//!
//! Defaults cover normal use. A JSON object stored under
//! [`CONFIG_KEY`] overrides individual fields (handy for debugging from the
//! devtools console); unknown or malformed content is ignored.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::repository::KeyValueStorage;

pub const CONFIG_KEY: &str = "dashboard-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Storage key of the snapshot
    pub data_key: String,
    /// Storage key of the theme preference
    pub theme_key: String,
    /// Quiet period after the last keystroke before a note is auto-saved
    pub autosave_delay_ms: u32,
    /// Pause shown as "Saving..." on explicit saves
    pub save_latency_ms: u32,
    /// Recent log lines kept for the settings dialog
    pub log_capacity: usize,
    /// Minimum level forwarded to the console (`trace` .. `error`)
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_key: "dashboard-data".to_string(),
            theme_key: "dashboard-theme".to_string(),
            autosave_delay_ms: 1000,
            save_latency_ms: 400,
            log_capacity: 200,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Defaults merged with the overrides found in `storage`
    pub fn load(storage: &impl KeyValueStorage) -> Self {
        let raw = match storage.read(CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            _ => return Self::default(),
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring malformed dashboard config");
            Self::default()
        })
    }

    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStorage;

    #[test]
    fn test_defaults_without_overrides() {
        let config = DashboardConfig::load(&MemoryStorage::new());
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn test_partial_override() {
        let storage = MemoryStorage::new().with_entry(CONFIG_KEY, r#"{"autosave_delay_ms": 250, "log_level": "debug"}"#);
        let config = DashboardConfig::load(&storage);
        assert_eq!(config.autosave_delay_ms, 250);
        assert_eq!(config.log_level(), Level::DEBUG);
        assert_eq!(config.data_key, "dashboard-data");
    }

    #[test]
    fn test_malformed_override_falls_back() {
        let storage = MemoryStorage::new().with_entry(CONFIG_KEY, "[1,2]");
        assert_eq!(DashboardConfig::load(&storage), DashboardConfig::default());
    }
}
