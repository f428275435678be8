//! Fixed names of the page contract shared by the theme and menu components.

// ── Theme ───────────────────────────────────────────────────────

/// Default `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "bc-theme";

/// Attribute on `<html>` mirroring the active theme.
pub const THEME_ATTR: &str = "data-theme";

/// Element id of the singleton theme toggle.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Class assigned to the theme toggle.
pub const THEME_TOGGLE_CLASS: &str = "theme-toggle";

/// Media query consulted when no theme is stored.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Button label while dark is active (the click switches to light).
pub const LABEL_TO_LIGHT: &str = "Включить светлую тему";

/// Button label while light is active (the click switches to dark).
pub const LABEL_TO_DARK: &str = "Включить темную тему";

/// Glyph shown while dark is active.
pub const GLYPH_TO_LIGHT: &str = "\u{2600}";

/// Glyph shown while light is active.
pub const GLYPH_TO_DARK: &str = "\u{25D0}";

// ── Mobile menus ────────────────────────────────────────────────

/// CSS selector matching regions carrying the `data-mobile-menu` marker.
pub const MENU_SELECTOR: &str = "[data-mobile-menu]";

/// Data attribute carrying the generated menu id.
pub const MENU_ID_ATTR: &str = "data-mobile-menu-id";

/// Prefix of generated menu ids (`mobile-menu-<N>`).
pub const MENU_ID_PREFIX: &str = "mobile-menu-";

/// Class of the per-region disclosure toggle.
pub const MENU_TOGGLE_CLASS: &str = "mobile-menu-toggle";

/// CSS selector matching disclosure toggles.
pub const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";

/// Class added to a region's parent once it is equipped.
pub const MENU_HOST_CLASS: &str = "mobile-menu-host";

/// Class marking an open region.
pub const MENU_OPEN_CLASS: &str = "is-open";

/// Visible glyph of every disclosure toggle.
pub const MENU_TOGGLE_GLYPH: &str = "\u{2261}";

/// Viewport width (CSS px) at which the desktop layout takes over and all menus close.
pub const DESKTOP_BREAKPOINT_PX: f64 = 700.0;

// ── Bootstrap ───────────────────────────────────────────────────

/// Id of the optional inline JSON element overriding [`crate::config::ChromeConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-chrome-config";
