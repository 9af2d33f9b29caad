// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences and application state to
//! disk after the update loop mutates them.

use crate::config;
use crate::ui::theming::ThemeMode;

use super::persisted_state::AppState;

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the mutating functions directly rather than through persistence.
pub fn persist_preferences(
    theme_mode: ThemeMode,
    language: Option<String>,
    reduce_motion: bool,
    animation_fps: u32,
) {
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.theme_mode = theme_mode;
    cfg.language = language;
    cfg.reduce_motion = Some(reduce_motion);
    cfg.animation_fps = Some(animation_fps);

    if let Err(error) = config::save(&cfg) {
        log::error!("Failed to save config: {error}");
    }
}

/// Persists the application state (favorites).
///
/// Returns the i18n key of a warning to surface if saving failed.
pub fn persist_app_state(state: &AppState) -> Option<String> {
    if cfg!(test) {
        return None;
    }

    state.save()
}
