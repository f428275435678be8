//! Error taxonomy for the chrome script.
//!
//! Nothing here ever reaches the page: listeners and the boot path log the
//! error and keep going. The type exists so DOM helpers can use `?`.

/// Failure inside a theme or menu operation.
#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    /// A string that is not exactly `"light"` or `"dark"`.
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),
    /// A string that is not of the form `mobile-menu-<N>` with `N >= 1`.
    #[error("invalid menu id: {0:?}")]
    InvalidMenuId(String),
    /// Every menu sequence number has been handed out.
    #[error("mobile menu ids exhausted")]
    MenuIdsExhausted,
    /// `window`, `document`, `<html>` or `<body>` is not available.
    #[error("missing browser global: {0}")]
    MissingGlobal(&'static str),
    /// A DOM call raised a script exception.
    #[error("{op} failed: {detail}")]
    Dom { op: &'static str, detail: String },
    /// The inline config element holds malformed JSON.
    #[error("invalid chrome config: {0}")]
    Config(#[from] serde_json::Error),
}
