//! # site-chrome
//!
//! Page chrome compiled to WebAssembly: a persisted light/dark theme toggle
//! and collapsible mobile navigation menus of which at most one is open.
//!
//! The decision logic is plain Rust and runs on the host for tests; the
//! `hydrate` feature adds the `web-sys` bindings and the wasm start function
//! that wires it to the live document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme resolution, apply/toggle, idempotent toggle mount |
//! | [`menu`] | Menu ids, discovery, and the single-open state machine |
//! | [`config`] | Page-overridable settings |
//! | [`error`] | [`error::ChromeError`] |
//! | [`consts`] | DOM contract names, storage key, glyphs, breakpoint |
//! | `dom` | (`hydrate`) `web-sys` implementations of the surfaces |
//! | `boot` | (`hydrate`) wasm start: pre-paint theme and event wiring |

pub mod config;
pub mod consts;
pub mod error;
pub mod menu;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
mod testing;
