// SPDX-License-Identifier: MPL-2.0
//! Light/Dark theme mode management.

use serde::{Deserialize, Serialize};

/// The two supported theme modes. Dark is the resting default and the
/// fallback whenever no persisted preference can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Flips light <-> dark. The single mutation entry point for the theme.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }

    #[test]
    fn serializes_lowercase() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            mode: ThemeMode,
        }

        let light = toml::to_string(&Wrapper {
            mode: ThemeMode::Light,
        })
        .unwrap();
        assert!(light.contains("\"light\""));

        let dark = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert!(dark.contains("\"dark\""));
    }
}
