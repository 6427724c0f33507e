//! The toggle control and the page that hosts it.
//!
//! [`ToggleControl`] is the checkbox seen through three capabilities: read
//! `checked`, write `checked`, and subscribe to user changes. Writing
//! `checked` programmatically never fires change listeners, the same as a DOM
//! checkbox; only user interaction does. [`ControlHost`] finds a control by id.
//!
//! [`MemoryToggle`] and [`MemoryPage`] are in-memory versions of both, used by
//! native tests. [`MemoryToggle::click`] and [`MemoryToggle::change_to`] play
//! the part of the user.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::error::ThemeError;

/// Listener invoked with the control's new `checked` value after a user change.
pub type ChangeHandler = Box<dyn FnMut(bool)>;

/// A checkbox-like control.
pub trait ToggleControl {
    /// Current `checked` state.
    fn checked(&self) -> bool;

    /// Set `checked` without notifying listeners.
    fn set_checked(&self, checked: bool);

    /// Register `handler` for every later user change, for the life of the page.
    fn subscribe(&self, handler: ChangeHandler) -> Result<(), ThemeError>;
}

/// Locates the toggle control in the hosting page.
pub trait ControlHost {
    type Control: ToggleControl;

    /// Find the control with element id `id`.
    ///
    /// Returns [`ThemeError::ControlMissing`] when nothing has that id.
    fn find_control(&self, id: &str) -> Result<Self::Control, ThemeError>;
}

#[derive(Default)]
struct ToggleInner {
    checked: Cell<bool>,
    listeners: RefCell<Vec<ChangeHandler>>,
    pending: RefCell<VecDeque<bool>>,
    dispatching: Cell<bool>,
}

/// In-memory checkbox. Clones share the same state.
#[derive(Clone, Default)]
pub struct MemoryToggle {
    inner: Rc<ToggleInner>,
}

impl MemoryToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a user click: flip `checked`, then dispatch `change`.
    pub fn click(&self) {
        self.change_to(!self.inner.checked.get());
    }

    /// Simulate the user leaving the control at `checked`, then dispatch `change`.
    ///
    /// A change made from inside a listener is queued and delivered to every
    /// listener once the current dispatch finishes.
    pub fn change_to(&self, checked: bool) {
        self.inner.checked.set(checked);
        self.inner.pending.borrow_mut().push_back(checked);
        if self.inner.dispatching.replace(true) {
            return;
        }

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(value) = next else {
                break;
            };
            // Listeners may subscribe more listeners while running.
            let mut running = self.inner.listeners.take();
            for listener in &mut running {
                listener(value);
            }
            let mut listeners = self.inner.listeners.borrow_mut();
            running.append(&mut listeners);
            *listeners = running;
        }
        self.inner.dispatching.set(false);
    }

    /// Number of registered change listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl std::fmt::Debug for MemoryToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryToggle")
            .field("checked", &self.inner.checked.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ToggleControl for MemoryToggle {
    fn checked(&self) -> bool {
        self.inner.checked.get()
    }

    fn set_checked(&self, checked: bool) {
        self.inner.checked.set(checked);
    }

    fn subscribe(&self, handler: ChangeHandler) -> Result<(), ThemeError> {
        self.inner.listeners.borrow_mut().push(handler);
        Ok(())
    }
}

/// In-memory page: a set of toggles addressed by element id.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    controls: HashMap<String, MemoryToggle>,
}

impl MemoryPage {
    /// A page with no controls at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page holding `control` under `id`.
    #[must_use]
    pub fn with_control(id: &str, control: MemoryToggle) -> Self {
        let mut page = Self::new();
        page.insert(id, control);
        page
    }

    pub fn insert(&mut self, id: &str, control: MemoryToggle) {
        self.controls.insert(id.to_string(), control);
    }
}

impl ControlHost for MemoryPage {
    type Control = MemoryToggle;

    fn find_control(&self, id: &str) -> Result<MemoryToggle, ThemeError> {
        self.controls
            .get(id)
            .cloned()
            .ok_or_else(|| ThemeError::ControlMissing { id: id.to_string() })
    }
}
