//! Fault-injecting backend.
//!
//! Wraps an [`InMemoryBackend`] and fails selected operations on demand.
//! The switches live behind a shared handle so a test can flip them after the
//! backend has been moved into a store.

use parking_lot::Mutex;
use prefstore_storage::{InMemoryBackend, KeyValueBackend, StorageError, StorageResult};
use std::sync::Arc;

#[derive(Debug, Default)]
struct FaultState {
    fail_reads: bool,
    fail_writes: bool,
    fail_removes: bool,
    fail_keys: bool,
    forget_writes: bool,
    calls: usize,
}

/// Shared switches controlling a [`FaultyBackend`].
#[derive(Debug, Clone, Default)]
pub struct Faults {
    state: Arc<Mutex<FaultState>>,
}

impl Faults {
    /// Makes `get` fail.
    pub fn fail_reads(&self, on: bool) {
        self.state.lock().fail_reads = on;
    }

    /// Makes `set` fail with a quota error.
    pub fn fail_writes(&self, on: bool) {
        self.state.lock().fail_writes = on;
    }

    /// Makes `remove` fail.
    pub fn fail_removes(&self, on: bool) {
        self.state.lock().fail_removes = on;
    }

    /// Makes `keys` fail.
    pub fn fail_keys(&self, on: bool) {
        self.state.lock().fail_keys = on;
    }

    /// Makes `set` report success without storing anything.
    pub fn forget_writes(&self, on: bool) {
        self.state.lock().forget_writes = on;
    }

    /// Turns every operation into a failure.
    pub fn fail_all(&self) {
        let mut state = self.state.lock();
        state.fail_reads = true;
        state.fail_writes = true;
        state.fail_removes = true;
        state.fail_keys = true;
    }

    /// Number of backend operations attempted so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.state.lock().calls
    }
}

/// A backend that fails on command.
#[derive(Debug, Clone, Default)]
pub struct FaultyBackend {
    inner: InMemoryBackend,
    faults: Faults,
}

impl FaultyBackend {
    /// Creates a backend with every fault switched off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that fails every operation.
    #[must_use]
    pub fn broken() -> Self {
        let backend = Self::new();
        backend.faults.fail_all();
        backend
    }

    /// Returns the fault switches.
    #[must_use]
    pub fn faults(&self) -> Faults {
        self.faults.clone()
    }

    /// Returns a view of the wrapped map.
    #[must_use]
    pub fn inner(&self) -> &InMemoryBackend {
        &self.inner
    }

    fn check(&self, pick: impl FnOnce(&FaultState) -> bool, what: &str) -> StorageResult<()> {
        let mut state = self.faults.state.lock();
        state.calls += 1;
        if pick(&state) {
            return Err(StorageError::Unavailable(format!("injected {what} failure")));
        }
        Ok(())
    }
}

impl KeyValueBackend for FaultyBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.check(|s| s.fail_reads, "read")?;
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let (fail, forget) = {
            let mut state = self.faults.state.lock();
            state.calls += 1;
            (state.fail_writes, state.forget_writes)
        };
        if fail {
            return Err(StorageError::QuotaExceeded {
                required: key.len() + value.len(),
                limit: 0,
            });
        }
        if forget {
            return Ok(());
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.check(|s| s.fail_removes, "remove")?;
        self.inner.remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        self.check(|s| s.fail_keys, "keys")?;
        self.inner.keys()
    }
}
