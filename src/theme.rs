//! Light/dark theme: resolution, application, persistence and the toggle button.
//!
//! The theme lives in three places that [`apply`] keeps in step: the
//! `data-theme` attribute on `<html>`, the `localStorage` entry, and the
//! label/glyph of the `#theme-toggle` button. The root attribute is the one
//! read back when the button is clicked.
//!
//! All effects go through [`ThemeSurface`] so the logic runs unchanged against
//! the live document (`dom::WebPage`) and against an in-memory page in tests.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::config::ChromeConfig;
use crate::consts::{GLYPH_TO_DARK, GLYPH_TO_LIGHT};
use crate::error::ChromeError;

/// The page's visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted / attribute spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label of the toggle while `self` is active.
    ///
    /// Describes the action a click performs, not the current state.
    #[must_use]
    pub fn action_label(self, config: &ChromeConfig) -> &str {
        match self {
            Self::Light => &config.labels.to_dark,
            Self::Dark => &config.labels.to_light,
        }
    }

    /// Glyph of the toggle while `self` is active.
    #[must_use]
    pub fn action_glyph(self) -> &'static str {
        match self {
            Self::Light => GLYPH_TO_DARK,
            Self::Dark => GLYPH_TO_LIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ChromeError;

    /// Accepts exactly `"light"` or `"dark"`; case and whitespace matter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ChromeError::InvalidTheme(other.to_owned())),
        }
    }
}

/// Page effects needed by the theme controller.
pub trait ThemeSurface {
    /// Raw persisted value, `None` if absent or storage is unavailable.
    fn stored_theme(&self) -> Option<String>;
    /// Persist `theme`. Failures are dropped.
    fn store_theme(&mut self, theme: Theme);
    /// Ambient color-scheme preference; `None` when the query is unavailable.
    fn prefers_dark(&self) -> Option<bool>;
    /// Raw value of the root theme attribute.
    fn root_theme(&self) -> Option<String>;
    fn set_root_theme(&mut self, theme: Theme);
    /// Whether the singleton toggle exists in the document.
    fn has_toggle(&self) -> bool;
    /// Create the toggle and append it to the body. Only called when absent.
    fn create_toggle(&mut self) -> Result<(), ChromeError>;
    /// Update the toggle's accessible label and glyph if it exists.
    fn update_toggle(&mut self, label: &str, glyph: &str);
}

/// Decide the theme at load time.
///
/// A stored `"light"`/`"dark"` wins; anything else falls through to the
/// ambient preference, and an unavailable query counts as light.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(Ok(theme)) = stored.map(str::parse::<Theme>) {
        return theme;
    }
    if prefers_dark == Some(true) { Theme::Dark } else { Theme::Light }
}

/// [`resolve_initial`] fed from `surface`.
pub fn initial_theme<S: ThemeSurface + ?Sized>(surface: &S) -> Theme {
    resolve_initial(surface.stored_theme().as_deref(), surface.prefers_dark())
}

/// Stamp the initial theme on the root before anything else renders.
///
/// Does not write storage: nothing has been chosen yet.
pub fn preload<S: ThemeSurface + ?Sized>(surface: &mut S) -> Theme {
    let theme = initial_theme(surface);
    surface.set_root_theme(theme);
    theme
}

/// The theme currently on the root, light if absent or unrecognized.
pub fn current<S: ThemeSurface + ?Sized>(surface: &S) -> Theme {
    match surface.root_theme().map(|raw| raw.parse::<Theme>()) {
        Some(Ok(theme)) => theme,
        _ => Theme::default(),
    }
}

/// Make `theme` active: root attribute, storage and toggle display.
pub fn apply<S: ThemeSurface + ?Sized>(surface: &mut S, config: &ChromeConfig, theme: Theme) {
    surface.set_root_theme(theme);
    surface.store_theme(theme);
    if surface.has_toggle() {
        surface.update_toggle(theme.action_label(config), theme.action_glyph());
    }
    log::debug!("theme applied: {theme}");
}

/// Switch to the opposite of [`current`]. Body of the toggle's click handler.
pub fn toggle<S: ThemeSurface + ?Sized>(surface: &mut S, config: &ChromeConfig) -> Theme {
    let next = current(surface).toggled();
    apply(surface, config, next);
    next
}

/// Create the toggle once and sync it with the active theme.
///
/// Returns `Ok(false)` when the toggle already exists; nothing is touched in
/// that case.
pub fn mount<S: ThemeSurface + ?Sized>(surface: &mut S, config: &ChromeConfig) -> Result<bool, ChromeError> {
    if surface.has_toggle() {
        return Ok(false);
    }
    surface.create_toggle()?;
    let theme = match surface.root_theme().map(|raw| raw.parse::<Theme>()) {
        Some(Ok(theme)) => theme,
        _ => initial_theme(surface),
    };
    apply(surface, config, theme);
    Ok(true)
}
