//! The namespaced preference store.

use crate::namespace::Namespace;
use crate::selector::{BackendKind, Selected};
use prefstore_storage::{KeyValueBackend, StorageResult};

/// A namespaced string preference store over one selected backend.
///
/// None of the accessors can fail. Storage errors are logged and absorbed:
/// writes are dropped (keeping the previous value), reads report absent and
/// removals do nothing.
///
/// The backend is fixed at construction; there is no way to swap it.
#[derive(Debug)]
pub struct UserDefaults<B> {
    backend: B,
    kind: BackendKind,
    namespace: Namespace,
}

impl<B: KeyValueBackend> UserDefaults<B> {
    /// Wraps an already selected backend.
    #[must_use]
    pub fn with_backend(namespace: Namespace, kind: BackendKind, backend: B) -> Self {
        Self {
            backend,
            kind,
            namespace,
        }
    }

    /// Wraps the outcome of a [`crate::BackendSelector`].
    #[must_use]
    pub fn from_selected(namespace: Namespace, selected: Selected<B>) -> Self {
        Self::with_backend(namespace, selected.kind, selected.backend)
    }

    /// Stores `value` under `key`.
    pub fn set(&mut self, key: &str, value: &str) {
        let full = self.namespace.key(key);
        if let Err(e) = self.backend.set(&full, value) {
            tracing::warn!(key, backend = %self.kind, error = %e, "dropping preference write");
        }
    }

    /// Returns the value stored under `key`, or `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let full = self.namespace.key(key);
        match self.backend.get(&full) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, backend = %self.kind, error = %e, "preference read failed");
                None
            }
        }
    }

    /// Removes `key` if present.
    pub fn remove(&mut self, key: &str) {
        let full = self.namespace.key(key);
        if let Err(e) = self.backend.remove(&full) {
            tracing::warn!(key, backend = %self.kind, error = %e, "preference removal failed");
        }
    }

    /// Returns true if `key` holds a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns this namespace's keys, sorted, without the prefix.
    ///
    /// Keys of other namespaces are left out. A backend that cannot be
    /// enumerated yields an empty list.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        match self.namespaced_keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(backend = %self.kind, error = %e, "listing preferences failed");
                Vec::new()
            }
        }
    }

    /// Removes every key in this namespace. Foreign keys are untouched.
    pub fn clear(&mut self) {
        for key in self.keys() {
            self.remove(&key);
        }
    }

    /// Returns the tier that was selected.
    #[must_use]
    pub fn backend_kind(&self) -> BackendKind {
        self.kind
    }

    /// Returns the key namespace.
    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn namespaced_keys(&self) -> StorageResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .backend
            .keys()?
            .iter()
            .filter_map(|stored| self.namespace.strip(stored))
            .map(str::to_string)
            .collect();
        keys.sort();
        Ok(keys)
    }
}
