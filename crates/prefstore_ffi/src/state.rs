//! Process-wide store.
//!
//! The store is opened on first access and lives until the process exits.
//! A configuration may be staged before that point; afterwards it is fixed.

use crate::error::FfiError;
use parking_lot::Mutex;
use prefstore_core::{Config, Namespace, NativeBackend, UserDefaults};
use std::sync::OnceLock;

pub(crate) type Store = UserDefaults<NativeBackend>;

/// Lazily opened store plus the configuration staged for it.
pub(crate) struct Registry {
    staged: Mutex<Option<Config>>,
    store: OnceLock<Mutex<Store>>,
}

impl Registry {
    pub(crate) const fn new() -> Self {
        Self {
            staged: Mutex::new(None),
            store: OnceLock::new(),
        }
    }

    /// Stages `config` for the first access.
    pub(crate) fn configure(&self, config: Config) -> Result<(), FfiError> {
        if self.store.get().is_some() {
            return Err(FfiError::AlreadyInitialized);
        }
        *self.staged.lock() = Some(config);
        Ok(())
    }

    /// Runs `f` against the store, opening it first if needed.
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let store = self.store.get_or_init(|| Mutex::new(self.open()));
        f(&mut store.lock())
    }

    fn open(&self) -> Store {
        let config = self.staged.lock().take().unwrap_or_default();
        match UserDefaults::open(&config) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(error = %e, "invalid preference configuration; using memory");
                UserDefaults::in_memory(Namespace::default())
            }
        }
    }
}

/// The store behind the exported functions.
pub(crate) static GLOBAL: Registry = Registry::new();
