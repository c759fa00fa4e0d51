//! Storage backend trait definition.

use crate::error::StorageResult;

/// A flat string key/value store.
///
/// Every preference tier (persistent, session, in-memory) implements this
/// trait, so callers see identical behavior whichever one was selected.
///
/// # Invariants
///
/// - `get` returns exactly the value most recently accepted by `set`
/// - A `set` or `remove` that returns an error leaves the store unchanged
/// - `remove` of an absent key succeeds
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - Process-lifetime map
/// - [`super::FileBackend`] - JSON file on disk
pub trait KeyValueBackend {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected, for example
    /// [`crate::StorageError::QuotaExceeded`].
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be modified.
    fn remove(&mut self, key: &str) -> StorageResult<()>;

    /// Returns every key currently held, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Box<B> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        (**self).keys()
    }
}

/// Returns the byte footprint of a map, counted as key plus value lengths.
pub(crate) fn footprint<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> usize {
    entries.map(|(k, v)| k.len() + v.len()).sum()
}

/// Byte footprint after `key` is set to `value` in a map that currently
/// holds `current` bytes and maps `key` to `previous`.
pub(crate) fn footprint_after_set(
    current: usize,
    key: &str,
    previous: Option<&String>,
    value: &str,
) -> usize {
    let removed = previous.map_or(0, |old| key.len() + old.len());
    current - removed + key.len() + value.len()
}
