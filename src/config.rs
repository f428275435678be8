//! Page-overridable settings.
//!
//! Defaults reproduce the fixed contract in [`crate::consts`]. A page may
//! override any subset through an inline JSON element; see
//! [`ChromeConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DESKTOP_BREAKPOINT_PX, LABEL_TO_DARK, LABEL_TO_LIGHT, STORAGE_KEY};
use crate::error::ChromeError;

/// Accessible labels for the theme toggle, one per action.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeLabels {
    /// Shown while dark is active.
    pub to_light: String,
    /// Shown while light is active.
    pub to_dark: String,
}

impl Default for ThemeLabels {
    fn default() -> Self {
        Self { to_light: LABEL_TO_LIGHT.to_owned(), to_dark: LABEL_TO_DARK.to_owned() }
    }
}

/// Settings shared by both components.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// `localStorage` key for the persisted theme.
    pub storage_key: String,
    /// Viewport width at or above which every menu is closed on resize.
    pub breakpoint_px: f64,
    pub labels: ThemeLabels,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            breakpoint_px: DESKTOP_BREAKPOINT_PX,
            labels: ThemeLabels::default(),
        }
    }
}

impl ChromeConfig {
    /// Parse a JSON object, filling absent fields with defaults.
    ///
    /// Blank input yields the defaults. Unknown fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self, ChromeError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
