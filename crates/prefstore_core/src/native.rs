//! File-backed tiers for native builds.

use crate::config::Config;
use crate::defaults::UserDefaults;
use crate::error::CoreResult;
use crate::namespace::Namespace;
use crate::selector::{BackendKind, BackendSelector};
use prefstore_storage::{FileBackend, InMemoryBackend, KeyValueBackend, StorageResult};
use std::path::PathBuf;

/// Backend type chosen on native targets.
pub type NativeBackend = Box<dyn KeyValueBackend + Send>;

fn open_file(path: PathBuf, quota: Option<usize>) -> StorageResult<NativeBackend> {
    Ok(with_quota(FileBackend::open_with_create_dirs(&path)?, quota))
}

fn open_session_file(path: PathBuf, quota: Option<usize>) -> StorageResult<NativeBackend> {
    Ok(with_quota(FileBackend::create(&path)?, quota))
}

fn with_quota(backend: FileBackend, quota: Option<usize>) -> NativeBackend {
    match quota {
        Some(limit) => Box::new(backend.with_quota(limit)),
        None => Box::new(backend),
    }
}

fn memory(quota: Option<usize>) -> NativeBackend {
    match quota {
        Some(limit) => Box::new(InMemoryBackend::with_quota(limit)),
        None => Box::new(InMemoryBackend::new()),
    }
}

impl UserDefaults<NativeBackend> {
    /// Opens a store, selecting persistent file, session file, or memory.
    ///
    /// The session file is emptied when opened, so session values last only
    /// as long as the returned store.
    ///
    /// # Errors
    ///
    /// Returns an error only if `config` is invalid. Unusable storage is not
    /// an error; the next weaker tier is used instead.
    pub fn open(config: &Config) -> CoreResult<Self> {
        let namespace = config.validate()?;
        let quota = config.quota_bytes;
        let persistent = config.persistent_path.clone();
        let session = config.session_path.clone();

        let selected = BackendSelector::new(namespace.clone())
            .preferred(config.preferred)
            .candidate(BackendKind::Persistent, move || open_file(persistent, quota))
            .candidate(BackendKind::Session, move || open_session_file(session, quota))
            .select(|| memory(quota));

        Ok(Self::from_selected(namespace, selected))
    }

    /// Opens a process-lifetime store without touching the filesystem.
    #[must_use]
    pub fn in_memory(namespace: Namespace) -> Self {
        Self::with_backend(namespace, BackendKind::Memory, memory(None))
    }
}
