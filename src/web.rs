//! Browser bindings: `localStorage`, the checkbox element, `matchMedia`, and
//! the page-load hook. Requires a browser environment.
//!
//! The wasm start function installs logging and schedules initialization for
//! the window `load` event, or runs it immediately when the document has
//! already finished loading.

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "web_test.rs"]
mod web_test;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, HtmlInputElement, Storage, Window};

use crate::config::{CONFIG_ELEMENT_ID, ThemeConfig};
use crate::control::{ChangeHandler, ControlHost, ToggleControl};
use crate::controller::{Initialized, ThemePreferenceController};
use crate::error::ThemeError;
use crate::store::PreferenceStore;
use crate::system::{ColorSchemeQuery, media_match};
use crate::theme::{Theme, ThemePreference};

fn describe(err: &JsValue) -> String {
    // DOMExceptions (e.g. QuotaExceededError) are Error instances.
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn storage_error(err: JsValue) -> ThemeError {
    ThemeError::Storage(describe(&err))
}

fn dom_error(err: JsValue) -> ThemeError {
    ThemeError::Dom(describe(&err))
}

/// The theme key in the origin's `localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
    key: String,
}

impl LocalStorageStore {
    /// Open `localStorage` for `window`.
    ///
    /// Accessing the property throws when storage is blocked; a `null`
    /// result means the browser does not expose it.
    pub fn open(window: &Window, key: impl Into<String>) -> Result<Self, ThemeError> {
        let storage = window
            .local_storage()
            .map_err(|_| ThemeError::StorageUnavailable)?
            .ok_or(ThemeError::StorageUnavailable)?;
        Ok(Self { storage, key: key.into() })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read_theme(&self) -> Result<ThemePreference, ThemeError> {
        let raw = self.storage.get_item(&self.key).map_err(storage_error)?;
        Ok(ThemePreference::decode(raw.as_deref()))
    }

    fn write_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        self.storage.set_item(&self.key, theme.as_str()).map_err(storage_error)
    }
}

/// A checkbox `<input>` element.
pub struct CheckboxControl {
    input: HtmlInputElement,
}

impl ToggleControl for CheckboxControl {
    fn checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.input.set_checked(checked);
    }

    fn subscribe(&self, mut handler: ChangeHandler) -> Result<(), ThemeError> {
        let input = self.input.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            handler(input.checked());
        });
        self.input
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(dom_error)?;
        // The listener lives as long as the page.
        listener.forget();
        Ok(())
    }
}

/// Looks up controls in a DOM document.
pub struct DocumentHost {
    document: Document,
}

impl ControlHost for DocumentHost {
    type Control = CheckboxControl;

    fn find_control(&self, id: &str) -> Result<CheckboxControl, ThemeError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::ControlMissing { id: id.to_string() })?;
        let input = element
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ThemeError::NotACheckbox { id: id.to_string() })?;
        Ok(CheckboxControl { input })
    }
}

/// `window.matchMedia(query).matches`, read on every call.
pub struct MediaQueryScheme {
    window: Window,
    query: String,
}

impl ColorSchemeQuery for MediaQueryScheme {
    fn is_dark_preferred(&self) -> bool {
        let lookup = self.window.match_media(&self.query).map(|list| list.map(|l| l.matches()));
        media_match(lookup)
    }
}

/// Read the page's configuration element, if any.
fn page_config(document: &Document) -> Result<ThemeConfig, ThemeError> {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .map(|element| element.text_content().unwrap_or_default());
    ThemeConfig::from_embedded(text.as_deref())
}

/// Initialize the toggle in the current page.
pub fn init_page() -> Result<Initialized, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoWindow)?;
    let config = page_config(&document)?;

    let store = Rc::new(LocalStorageStore::open(&window, config.storage_key.clone())?);
    let query = MediaQueryScheme { window, query: config.media_query.clone() };
    let controller = ThemePreferenceController::new(config, store, query);
    controller.initialize(&DocumentHost { document })
}

/// Any initialization error leaves the toggle inert for this page load.
fn boot() {
    match init_page() {
        Ok(init) if init.from_system() => log::info!("theme toggle ready: {} (system preference)", init.theme),
        Ok(init) => log::info!("theme toggle ready: {} (stored)", init.theme),
        Err(e) => log::error!("theme toggle disabled: {e}"),
    }
}

/// Register initialization for the window `load` event.
fn schedule(window: &Window) -> Result<(), ThemeError> {
    let loaded = window
        .document()
        .is_some_and(|doc| doc.ready_state() == "complete");
    if loaded {
        boot();
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(|_event: web_sys::Event| boot());
    window
        .add_event_listener_with_callback_and_add_event_listener_options("load", callback.unchecked_ref(), &options)
        .map_err(dom_error)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger not installed: {e}");
    }

    match web_sys::window() {
        Some(window) => {
            if let Err(e) = schedule(&window) {
                log::error!("theme toggle not scheduled: {e}");
            }
        }
        None => log::error!("theme toggle disabled: {}", ThemeError::NoWindow),
    }
}
