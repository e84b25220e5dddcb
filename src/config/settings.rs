//! Application settings for Artistly
//!
//! This module handles the settings stored in settings.json.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use super::{Paths, ARTISTS_DOCUMENT, ROSTER_DOCUMENT};
use crate::models::SortKey;

static SETTINGS: OnceCell<Arc<RwLock<Settings>>> = OnceCell::new();

/// Settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Listing catalog source: a path relative to the data directory or a url
    #[serde(default = "default_artists_source")]
    pub artists_source: String,

    /// Onboarded roster source
    #[serde(default = "default_roster_source")]
    pub roster_source: String,

    /// Host address for `serve`
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for `serve`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Sort key used when none is given
    #[serde(default)]
    pub default_sort: SortKey,

    /// Timeout for remote catalog requests, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            artists_source: default_artists_source(),
            roster_source: default_roster_source(),
            host: default_host(),
            port: default_port(),
            default_sort: SortKey::default(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl Settings {
    /// Load settings from the config directory, writing defaults on first run
    pub fn load() -> Result<Self> {
        let paths = Paths::get()?;
        Self::load_from(&paths.settings_path())
    }

    /// Load settings from a specific file, creating it when missing
    pub fn load_from(settings_path: &Path) -> Result<Self> {
        if settings_path.exists() {
            let content =
                std::fs::read_to_string(settings_path).context("Failed to read settings file")?;
            let settings: Settings =
                serde_json::from_str(&content).context("Failed to parse settings file")?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save_to(settings_path)?;
            Ok(settings)
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<()> {
        let paths = Paths::get()?;
        self.save_to(&paths.settings_path())
    }

    pub fn save_to(&self, settings_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(settings_path, content).context("Failed to write settings file")?;
        Ok(())
    }

    /// Get the global settings instance
    pub fn global() -> Arc<RwLock<Settings>> {
        SETTINGS
            .get_or_init(|| {
                let settings = Settings::load().unwrap_or_else(|e| {
                    tracing::warn!("Using default settings: {}", e);
                    Settings::default()
                });
                Arc::new(RwLock::new(settings))
            })
            .clone()
    }
}

// Default value functions for serde

fn default_artists_source() -> String {
    ARTISTS_DOCUMENT.to_string()
}

fn default_roster_source() -> String {
    ROSTER_DOCUMENT.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_fetch_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.artists_source, "artists.json");
        assert_eq!(settings.roster_source, "onboardArtists.json");
        assert_eq!(settings.default_sort, SortKey::Popularity);
        assert_eq!(settings.port, 3000);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let json = r#"{ "port": 8080, "defaultSort": "rating" }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.default_sort, SortKey::Rating);
        assert_eq!(settings.host, "127.0.0.1");
    }

    #[test]
    fn test_load_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        assert!(!path.exists());

        let settings = Settings::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(settings.fetch_timeout_secs, 10);

        let mut changed = settings.clone();
        changed.artists_source = "https://example.com/artists.json".into();
        changed.save_to(&path).unwrap();
        let reloaded = Settings::load_from(&path).unwrap();
        assert_eq!(reloaded.artists_source, "https://example.com/artists.json");
    }
}
