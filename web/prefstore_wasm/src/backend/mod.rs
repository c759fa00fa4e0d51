//! Web storage backends.
//!
//! This module provides the three browser tiers:
//! - `localStorage` (persistent)
//! - `sessionStorage` (session)
//! - An in-memory map when neither is usable (storage disabled, private
//!   browsing quotas of zero, sandboxed frames)
//!
//! All three sit behind [`WebBackend`] so the store sees one type.

mod web_storage;

pub use web_storage::{StorageArea, WebStorage};

use prefstore_core::{BackendKind, BackendSelector, Namespace, Selected};
use prefstore_storage::{InMemoryBackend, KeyValueBackend, StorageResult};

/// The backend selected for this page.
#[derive(Debug, Clone)]
pub enum WebBackend {
    /// `window.localStorage`.
    Local(WebStorage),
    /// `window.sessionStorage`.
    Session(WebStorage),
    /// Page-lifetime map.
    Memory(InMemoryBackend),
}

impl WebBackend {
    /// Probes local, then session storage, falling back to memory.
    pub fn detect(namespace: &Namespace, preferred: BackendKind) -> Selected<Self> {
        BackendSelector::new(namespace.clone())
            .preferred(preferred)
            .candidate(BackendKind::Persistent, || {
                WebStorage::open(StorageArea::Local).map(WebBackend::Local)
            })
            .candidate(BackendKind::Session, || {
                WebStorage::open(StorageArea::Session).map(WebBackend::Session)
            })
            .select(|| WebBackend::Memory(InMemoryBackend::new()))
    }

    fn inner(&self) -> &dyn KeyValueBackend {
        match self {
            WebBackend::Local(storage) | WebBackend::Session(storage) => storage,
            WebBackend::Memory(memory) => memory,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn KeyValueBackend {
        match self {
            WebBackend::Local(storage) | WebBackend::Session(storage) => storage,
            WebBackend::Memory(memory) => memory,
        }
    }
}

impl KeyValueBackend for WebBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.inner_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.inner_mut().remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        self.inner().keys()
    }
}
