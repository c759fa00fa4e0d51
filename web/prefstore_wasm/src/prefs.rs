//! Preference WASM bindings.
//!
//! Two surfaces share one implementation:
//! - Free functions (`setValue`, `getValue`, `removeValue`) over a page-wide
//!   store opened on first call, for engine glue that calls by name.
//! - A [`WebPrefs`] class for callers that want their own namespace.

use crate::backend::WebBackend;
use crate::error::{WasmError, WasmResult};
use crate::utils;
use js_sys::Array;
use prefstore_core::{BackendKind, Namespace, UserDefaults};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

fn open_store(namespace: Namespace, preferred: BackendKind) -> UserDefaults<WebBackend> {
    let selected = WebBackend::detect(&namespace, preferred);
    utils::console_debug(&format!(
        "prefstore: namespace {namespace} using {} storage",
        selected.kind
    ));
    UserDefaults::from_selected(namespace, selected)
}

thread_local! {
    static PAGE_STORE: RefCell<UserDefaults<WebBackend>> =
        RefCell::new(open_store(Namespace::default(), BackendKind::Persistent));
}

/// Stores `value` under `key` in the page-wide store.
///
/// Never throws; a rejected write leaves the previous value in place.
#[wasm_bindgen(js_name = setValue)]
pub fn set_value(key: &str, value: &str) {
    PAGE_STORE.with(|store| store.borrow_mut().set(key, value));
}

/// Returns the value stored under `key`, or `null`.
#[wasm_bindgen(js_name = getValue)]
pub fn get_value(key: &str) -> Option<String> {
    PAGE_STORE.with(|store| store.borrow().get(key))
}

/// Removes `key` from the page-wide store.
#[wasm_bindgen(js_name = removeValue)]
pub fn remove_value(key: &str) {
    PAGE_STORE.with(|store| store.borrow_mut().remove(key));
}

/// Returns `"persistent"`, `"session"` or `"memory"` for the page-wide store.
#[wasm_bindgen(js_name = backendKind)]
pub fn backend_kind() -> String {
    PAGE_STORE.with(|store| store.borrow().backend_kind().to_string())
}

fn parse_kind(name: &str) -> Option<BackendKind> {
    match name {
        "persistent" => Some(BackendKind::Persistent),
        "session" => Some(BackendKind::Session),
        "memory" => Some(BackendKind::Memory),
        _ => None,
    }
}

/// A namespaced preference store.
///
/// ## Example
///
/// ```javascript
/// const prefs = new WebPrefs("MyGame");
/// prefs.set("volume", "0.8");
/// prefs.get("volume");   // "0.8"
/// prefs.keys();          // ["volume"]
/// ```
#[wasm_bindgen]
pub struct WebPrefs {
    inner: UserDefaults<WebBackend>,
}

#[wasm_bindgen]
impl WebPrefs {
    /// Opens a store.
    ///
    /// # Arguments
    ///
    /// * `namespace` - Key prefix; defaults to `CCUserDefault`
    /// * `preferred` - Strongest tier to try: `"persistent"` (default),
    ///   `"session"` or `"memory"`
    #[wasm_bindgen(constructor)]
    pub fn new(namespace: Option<String>, preferred: Option<String>) -> Result<WebPrefs, JsValue> {
        Ok(Self::open(namespace, preferred)?)
    }

    /// Stores `value` under `key`.
    #[wasm_bindgen]
    pub fn set(&mut self, key: &str, value: &str) {
        self.inner.set(key, value);
    }

    /// Returns the value under `key`, or `null`.
    #[wasm_bindgen]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    /// Removes `key`.
    #[wasm_bindgen]
    pub fn remove(&mut self, key: &str) {
        self.inner.remove(key);
    }

    /// Returns this namespace's keys, sorted.
    #[wasm_bindgen]
    pub fn keys(&self) -> Array {
        self.inner
            .keys()
            .into_iter()
            .map(|key| JsValue::from_str(&key))
            .collect()
    }

    /// Removes every key in this namespace.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns the selected tier name.
    #[wasm_bindgen(getter, js_name = backendKind)]
    pub fn backend_kind(&self) -> String {
        self.inner.backend_kind().to_string()
    }

    /// Returns the namespace.
    #[wasm_bindgen(getter)]
    pub fn namespace(&self) -> String {
        self.inner.namespace().to_string()
    }
}

impl WebPrefs {
    fn open(namespace: Option<String>, preferred: Option<String>) -> WasmResult<WebPrefs> {
        let namespace = match namespace {
            Some(name) => Namespace::new(name)?,
            None => Namespace::default(),
        };
        let preferred = match preferred.as_deref() {
            Some(name) => parse_kind(name).ok_or_else(|| {
                WasmError::InvalidInput(format!("unknown backend {name:?}"))
            })?,
            None => BackendKind::Persistent,
        };
        Ok(WebPrefs {
            inner: open_store(namespace, preferred),
        })
    }
}
