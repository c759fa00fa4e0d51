//! `window.localStorage` / `window.sessionStorage` backend.

use crate::error::storage_error;
use prefstore_storage::{KeyValueBackend, StorageError, StorageResult};
use web_sys::Storage;

/// Which Web Storage area to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// `window.localStorage`, kept across visits.
    Local,
    /// `window.sessionStorage`, kept for the tab's lifetime.
    Session,
}

/// A Web Storage area.
///
/// Every call can throw (storage disabled by policy, quota exceeded, opaque
/// origins); exceptions come back as [`StorageError::Unavailable`].
#[derive(Debug, Clone)]
pub struct WebStorage {
    area: StorageArea,
    storage: Storage,
}

impl WebStorage {
    /// Opens a storage area of the current window.
    ///
    /// # Errors
    ///
    /// Fails if there is no window, the getter throws, or the area is absent.
    pub fn open(area: StorageArea) -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?;

        let storage = match area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        }
        .map_err(|e| storage_error("opening storage", &e))?
        .ok_or_else(|| StorageError::Unavailable(format!("{area:?} storage absent")))?;

        tracing::debug!(?area, "opened web storage");
        Ok(Self { area, storage })
    }

    /// Returns which area this is.
    pub fn area(&self) -> StorageArea {
        self.area
    }
}

impl KeyValueBackend for WebStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| storage_error("getItem", &e))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| storage_error("setItem", &e))
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| storage_error("removeItem", &e))
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let len = self
            .storage
            .length()
            .map_err(|e| storage_error("length", &e))?;

        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = self
                .storage
                .key(index)
                .map_err(|e| storage_error("key", &e))?
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
