//! Load-time initialization and change handling for the theme toggle.
//!
//! On load, [`ThemePreferenceController::initialize`] finds the toggle, reads
//! the stored preference, and shows it on the control. With nothing stored,
//! the control mirrors the system color scheme instead. It then subscribes to
//! the control so every user change overwrites the stored preference.
//!
//! Initialization only reads storage. The first write happens on the first
//! user change, which moves the preference out of `Unset` for good.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::control::{ControlHost, ToggleControl};
use crate::error::ThemeError;
use crate::store::PreferenceStore;
use crate::system::ColorSchemeQuery;
use crate::theme::{Theme, ThemePreference, Transition};

/// Outcome of a successful initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Initialized {
    /// What storage held at load time.
    pub stored: ThemePreference,
    /// What the control now displays.
    pub theme: Theme,
}

impl Initialized {
    /// Whether the displayed theme came from the system preference.
    #[must_use]
    pub fn from_system(&self) -> bool {
        self.stored.is_unset()
    }
}

/// Keeps the toggle control and the stored theme preference in step.
///
/// Any error from [`initialize`](Self::initialize) disables the toggle for the
/// page. Errors from a change only mean that choice was not remembered.
pub struct ThemePreferenceController<S, Q> {
    config: ThemeConfig,
    store: Rc<S>,
    query: Q,
    preference: Rc<Cell<ThemePreference>>,
}

impl<S, Q> ThemePreferenceController<S, Q>
where
    S: PreferenceStore + 'static,
    Q: ColorSchemeQuery,
{
    #[must_use]
    pub fn new(config: ThemeConfig, store: Rc<S>, query: Q) -> Self {
        Self { config, store, query, preference: Rc::new(Cell::new(ThemePreference::Unset)) }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn query(&self) -> &Q {
        &self.query
    }

    /// The preference as last read or written by this controller.
    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    /// Sync the control with the stored preference and start persisting changes.
    ///
    /// Fails without touching storage when the control is missing. Fails
    /// before subscribing when storage cannot be read.
    pub fn initialize<H: ControlHost>(&self, host: &H) -> Result<Initialized, ThemeError> {
        let control = host.find_control(&self.config.control_id)?;
        let stored = self.store.read_theme()?;
        let theme = stored.resolve(|| self.query.is_dark_preferred());
        control.set_checked(theme.is_dark());
        self.preference.set(stored);

        let store = Rc::clone(&self.store);
        let preference = Rc::clone(&self.preference);
        control.subscribe(Box::new(move |checked| {
            if let Err(e) = apply_change(&*store, &preference, checked) {
                log::warn!("theme preference not saved: {e}");
            }
        }))?;

        log::debug!(
            "theme toggle #{} initialized: stored={stored} displayed={theme}",
            self.config.control_id
        );
        Ok(Initialized { stored, theme })
    }

    /// Persist the theme for a control that is now `checked`.
    ///
    /// The tracked preference only advances when the write succeeds.
    pub fn on_change(&self, checked: bool) -> Result<Transition, ThemeError> {
        apply_change(&*self.store, &self.preference, checked)
    }
}

/// Write `"dark"` when `checked`, `"light"` otherwise. Always overwrites.
fn apply_change<S: PreferenceStore + ?Sized>(
    store: &S,
    preference: &Cell<ThemePreference>,
    checked: bool,
) -> Result<Transition, ThemeError> {
    let step = preference.get().after_toggle(checked);
    store.write_theme(step.to)?;
    preference.set(step.next());
    if step.is_first_choice() {
        log::info!("theme preference chosen: {}", step.to);
    } else {
        log::debug!("theme preference saved: {step}");
    }
    Ok(step)
}
