//! Persistent preference storage.
//!
//! DESIGN
//! ======
//! The controller never touches `localStorage` directly. It talks to a
//! [`PreferenceStore`], which reads and writes the single theme key and owns
//! the string encoding. The browser implementation lives in `web`;
//! [`MemoryStore`] backs native tests and non-browser hosts.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::ThemeError;
use crate::theme::{Theme, ThemePreference};

/// Read/write access to the persisted theme preference.
///
/// Methods take `&self`: stores are shared between the load handler and the
/// change listener, and use interior mutability where they need it.
pub trait PreferenceStore {
    /// Read the stored preference. Absent means [`ThemePreference::Unset`].
    fn read_theme(&self) -> Result<ThemePreference, ThemeError>;

    /// Overwrite the stored preference with `theme`.
    fn write_theme(&self, theme: Theme) -> Result<(), ThemeError>;
}

/// Origin-scoped key/value store held in memory.
///
/// Keeps every key, not just the theme key, so tests can check that
/// unrelated entries are left alone.
#[derive(Debug)]
pub struct MemoryStore {
    key: String,
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    failure: RefCell<Option<ThemeError>>,
}

impl MemoryStore {
    /// An empty store using the default `theme` key.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }

    /// An empty store that persists the theme under `key`.
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: RefCell::new(HashMap::new()),
            writes: Cell::new(0),
            failure: RefCell::new(None),
        }
    }

    /// Seed a raw entry, bypassing the theme encoding.
    pub fn set_item(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Raw value stored under the theme key.
    #[must_use]
    pub fn raw_theme(&self) -> Option<String> {
        self.get_item(&self.key)
    }

    /// Number of successful theme writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Simulate storage being disabled: every call fails until re-enabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.fail_with(unavailable.then_some(ThemeError::StorageUnavailable));
    }

    /// Make every later read and write fail with `failure`, or succeed again with `None`.
    pub fn fail_with(&self, failure: Option<ThemeError>) {
        *self.failure.borrow_mut() = failure;
    }

    fn check_available(&self) -> Result<(), ThemeError> {
        match &*self.failure.borrow() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn read_theme(&self) -> Result<ThemePreference, ThemeError> {
        self.check_available()?;
        Ok(ThemePreference::decode(self.entries.borrow().get(&self.key).map(String::as_str)))
    }

    fn write_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        self.check_available()?;
        self.set_item(&self.key, theme.as_str());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<S> {
    fn read_theme(&self) -> Result<ThemePreference, ThemeError> {
        (**self).read_theme()
    }

    fn write_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        (**self).write_theme(theme)
    }
}
