//! Toggle configuration: which element, which storage key, which media query.
//!
//! Pages get the defaults unless they embed a JSON object in an element with
//! id [`CONFIG_ELEMENT_ID`], e.g.
//! `<script type="application/json" id="theme-toggle-config">{"storage_key":"site-theme"}</script>`.
//! Missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;
use crate::system::PREFERS_DARK_QUERY;

pub const DEFAULT_CONTROL_ID: &str = "dark-mode-checkbox";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const CONFIG_ELEMENT_ID: &str = "theme-toggle-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Element id of the checkbox.
    pub control_id: String,
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Media query consulted when nothing is stored.
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            media_query: PREFERS_DARK_QUERY.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Configuration from the page's config element.
    ///
    /// `text` is the element's text content, or `None` when the page has no
    /// such element.
    pub fn from_embedded(text: Option<&str>) -> Result<Self, ThemeError> {
        text.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    /// Parse a page-supplied JSON object. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("control_id", &self.control_id),
            ("storage_key", &self.storage_key),
            ("media_query", &self.media_query),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
