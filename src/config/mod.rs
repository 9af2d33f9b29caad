// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use glint::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::{
    COPIED_CONFIRMATION_SECS, DEFAULT_ANIMATION_FPS, DEFAULT_EVENT_BUFFER_CAPACITY,
    MAX_ANIMATION_FPS, MIN_ANIMATION_FPS,
};

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub reduce_motion: Option<bool>,
    #[serde(default)]
    pub animation_fps: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
            reduce_motion: Some(false),
            animation_fps: Some(DEFAULT_ANIMATION_FPS),
        }
    }
}

/// Clamps a persisted frame rate into the supported range so hand-edited
/// configs cannot request nonsensical tick rates.
#[must_use]
pub fn clamp_animation_fps(fps: u32) -> u32 {
    fps.clamp(MIN_ANIMATION_FPS, MAX_ANIMATION_FPS)
}

pub fn load() -> Result<Config> {
    if let Some(path) = crate::app::paths::config_file_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = crate::app::paths::config_file_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
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
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
            reduce_motion: Some(true),
            animation_fps: Some(24),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.theme_mode, config.theme_mode);
        assert_eq!(loaded.reduce_motion, config.reduce_motion);
        assert_eq!(loaded.animation_fps, config.animation_fps);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        std::fs::write(&config_path, "not = [valid").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.theme_mode, ThemeMode::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        std::fs::write(&config_path, "language = \"en-US\"\n").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.language, Some("en-US".to_string()));
        assert_eq!(loaded.theme_mode, ThemeMode::default());
    }

    #[test]
    fn clamp_animation_fps_bounds_input() {
        assert_eq!(clamp_animation_fps(1), MIN_ANIMATION_FPS);
        assert_eq!(clamp_animation_fps(240), MAX_ANIMATION_FPS);
        assert_eq!(clamp_animation_fps(30), 30);
    }
}
