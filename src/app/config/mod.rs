// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[showcase]` - Carousel autoplay and loop behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` or set the `VITRINA_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! A missing file yields the defaults; an unreadable file yields the defaults
//! plus a warning key the caller can surface as a toast.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Persisted theme preference; absent or unreadable means dark.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Carousel behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseConfig {
    /// Seconds between automatic hero slide advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_interval_secs: Option<u64>,

    /// Whether the product gallery advances by itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_autoplay: Option<bool>,

    /// Seconds between automatic gallery advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_interval_secs: Option<u64>,

    /// Whether the product gallery wraps around at its ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_loop: Option<bool>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            hero_interval_secs: Some(DEFAULT_HERO_INTERVAL_SECS),
            gallery_autoplay: Some(DEFAULT_GALLERY_AUTOPLAY),
            gallery_interval_secs: Some(DEFAULT_GALLERY_INTERVAL_SECS),
            gallery_loop: Some(DEFAULT_GALLERY_LOOP),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Carousel behavior settings.
    #[serde(default)]
    pub showcase: ShowcaseConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, degrading to defaults.
///
/// Returns the config plus an optional i18n warning key when a file existed
/// but could not be parsed.
pub fn load() -> (Config, Option<&'static str>) {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some("notification-config-load-error")),
            };
        }
    }
    (Config::default(), None)
}

/// Persists the configuration to the resolved config path.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_theme() {
        let config = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
                theme_mode: ThemeMode::Light,
            },
            showcase: ShowcaseConfig::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.general.language, config.general.language);
    }

    #[test]
    fn default_theme_mode_is_dark() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_theme_field_defaults_to_dark() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"es\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.general.language.as_deref(), Some("es"));
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn showcase_defaults_match_constants() {
        let showcase = ShowcaseConfig::default();
        assert_eq!(showcase.hero_interval_secs, Some(DEFAULT_HERO_INTERVAL_SECS));
        assert_eq!(showcase.gallery_autoplay, Some(DEFAULT_GALLERY_AUTOPLAY));
        assert_eq!(showcase.gallery_loop, Some(DEFAULT_GALLERY_LOOP));
    }
}
