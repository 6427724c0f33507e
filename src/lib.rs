//! # theme-toggle
//!
//! Remembers a page's light/dark choice. A checkbox (`#dark-mode-checkbox`)
//! shows the current theme; the choice is stored in `localStorage` under
//! `theme` as `"light"` or `"dark"`. When nothing is stored yet, the checkbox
//! mirrors the system `prefers-color-scheme` setting.
//!
//! The logic is written against small capability traits so it runs natively
//! in tests; the `hydrate` feature adds the browser bindings and a wasm start
//! function that wires everything up on page load.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme` and the tri-state `ThemePreference`, with storage encoding |
//! | [`store`] | [`store::PreferenceStore`] and the in-memory store |
//! | [`control`] | [`control::ToggleControl`], [`control::ControlHost`] and in-memory versions |
//! | [`system`] | [`system::ColorSchemeQuery`] for the platform dark preference |
//! | [`controller`] | Load-time initialization and change persistence |
//! | [`config`] | Element id, storage key and media query |
//! | [`error`] | [`error::ThemeError`] |
//! | `web` | Browser implementations and the load hook (`hydrate` only) |

pub mod config;
pub mod control;
pub mod controller;
pub mod error;
pub mod store;
pub mod system;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::{Initialized, ThemePreferenceController};
pub use error::ThemeError;
pub use theme::{Theme, ThemePreference};
