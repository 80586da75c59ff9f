// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic.
//!
//! The theme preference (and the active language) is written back to
//! `settings.toml` on every change; a failed write degrades to a warning
//! key the caller surfaces as a toast.

use crate::app::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling `config::save_to_path` directly rather than touching the real
/// config directory.
pub fn persist_preferences(theme_mode: ThemeMode, i18n: &I18n) -> Option<&'static str> {
    if cfg!(test) {
        return None;
    }

    let (mut cfg, _) = config::load();
    cfg.general.theme_mode = theme_mode;
    cfg.general.language = Some(i18n.current_locale().to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
        return Some("notification-config-save-error");
    }
    None
}
