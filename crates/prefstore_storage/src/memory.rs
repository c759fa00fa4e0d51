//! In-memory storage backend.

use crate::backend::{footprint, footprint_after_set, KeyValueBackend};
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An in-memory key/value backend.
///
/// This backend keeps entries for the lifetime of the process only and is
/// used for:
/// - The last-resort fallback when no other tier is usable
/// - Unit and integration tests
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a store wrote through it.
///
/// # Example
///
/// ```rust
/// use prefstore_storage::{KeyValueBackend, InMemoryBackend};
///
/// let mut backend = InMemoryBackend::new();
/// let view = backend.clone();
/// backend.set("k", "v").unwrap();
/// assert_eq!(view.get("k").unwrap().as_deref(), Some("v"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    data: Arc<RwLock<BTreeMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty backend that rejects writes once the total of key
    /// and value lengths would exceed `limit` bytes.
    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self {
            data: Arc::default(),
            quota: Some(limit),
        }
    }

    /// Returns a copy of all entries.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.data.read().clone()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if the backend holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KeyValueBackend for InMemoryBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let mut data = self.data.write();

        if let Some(limit) = self.quota {
            let current = footprint(data.iter());
            let required = footprint_after_set(current, key, data.get(key), value);
            if required > limit {
                return Err(StorageError::QuotaExceeded { required, limit });
            }
        }

        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_set_and_get() {
        let mut backend = InMemoryBackend::new();
        backend.set("hello", "world").unwrap();
        assert_eq!(backend.get("hello").unwrap().as_deref(), Some("world"));
    }

    #[test]
    fn memory_missing_key() {
        let backend = InMemoryBackend::new();
        assert_eq!(backend.get("nope").unwrap(), None);
    }

    #[test]
    fn memory_overwrite() {
        let mut backend = InMemoryBackend::new();
        backend.set("k", "one").unwrap();
        backend.set("k", "two").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn memory_remove_is_idempotent() {
        let mut backend = InMemoryBackend::new();
        backend.set("k", "v").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn memory_quota_rejects_and_keeps_state() {
        let mut backend = InMemoryBackend::with_quota(8);
        backend.set("ab", "cd").unwrap();

        let result = backend.set("ef", "0123456789");
        assert!(matches!(result, Err(StorageError::QuotaExceeded { limit: 8, .. })));
        assert_eq!(backend.get("ef").unwrap(), None);
        assert_eq!(backend.get("ab").unwrap().as_deref(), Some("cd"));
    }

    #[test]
    fn memory_quota_counts_replacement() {
        let mut backend = InMemoryBackend::with_quota(6);
        backend.set("k", "abcde").unwrap();
        // Replacing the value frees the old bytes first.
        backend.set("k", "vwxyz").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("vwxyz"));
    }

    #[test]
    fn memory_clones_share_data() {
        let mut backend = InMemoryBackend::new();
        let view = backend.clone();
        backend.set("shared", "yes").unwrap();
        assert_eq!(view.snapshot().get("shared").map(String::as_str), Some("yes"));
    }

    #[test]
    fn memory_keys() {
        let mut backend = InMemoryBackend::new();
        backend.set("b", "2").unwrap();
        backend.set("a", "1").unwrap();
        assert_eq!(backend.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }
}
