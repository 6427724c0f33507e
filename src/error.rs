//! Error type shared by every theme capability.

/// Failure raised while initializing or persisting the theme preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// No element with the configured id exists in the page.
    #[error("toggle control not found: #{id}")]
    ControlMissing { id: String },

    /// An element with the configured id exists but is not an `<input>`.
    #[error("element #{id} is not a checkbox input")]
    NotACheckbox { id: String },

    /// Persistent storage is disabled or not exposed by the host.
    #[error("persistent storage unavailable")]
    StorageUnavailable,

    /// A storage read or write was rejected by the host.
    #[error("storage operation failed: {0}")]
    Storage(String),

    /// A DOM call other than storage access threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// There is no global `window` (not running in a browser page).
    #[error("no window object available")]
    NoWindow,

    /// The host-supplied configuration could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}
