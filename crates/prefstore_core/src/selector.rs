//! Backend selection.
//!
//! Candidates are tried strongest first. Each one must open and pass a
//! sentinel write/read/remove probe; the first that does wins. If none does,
//! the caller-supplied fallback (an in-memory map) is used. Rejections are
//! logged and never reported to the caller.

use crate::namespace::Namespace;
use prefstore_storage::{KeyValueBackend, StorageError, StorageResult};
use std::fmt;

/// Suffix appended directly to the namespace to form the sentinel key.
///
/// There is no separator between the two, so the sentinel never equals
/// [`Namespace::key`] for any caller key.
pub const PROBE_SUFFIX: &str = "__prefstore_probe__";

const PROBE_VALUE: &str = "prefstore-probe";

/// Returns the sentinel key written while probing `namespace`.
#[must_use]
pub fn probe_key(namespace: &Namespace) -> String {
    format!("{namespace}{PROBE_SUFFIX}")
}

/// The storage tier a backend belongs to, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum BackendKind {
    /// Survives restarts.
    Persistent = 0,
    /// Survives for the current session only.
    Session = 1,
    /// Lives for the current process only.
    Memory = 2,
}

impl BackendKind {
    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BackendKind::Persistent => "persistent",
            BackendKind::Session => "session",
            BackendKind::Memory => "memory",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of selection: the winning backend and its tier.
#[derive(Debug)]
pub struct Selected<B> {
    /// Which tier won.
    pub kind: BackendKind,
    /// The backend itself.
    pub backend: B,
}

type Opener<B> = Box<dyn FnOnce() -> StorageResult<B>>;

/// Chooses a backend by probing candidates in registration order.
///
/// # Example
///
/// ```rust
/// use prefstore_core::{BackendKind, BackendSelector, Namespace};
/// use prefstore_storage::{InMemoryBackend, StorageError};
///
/// let selected = BackendSelector::new(Namespace::default())
///     .candidate(BackendKind::Persistent, || {
///         Err(StorageError::Unavailable("no disk".into()))
///     })
///     .candidate(BackendKind::Session, || Ok(InMemoryBackend::new()))
///     .select(InMemoryBackend::new);
///
/// assert_eq!(selected.kind, BackendKind::Session);
/// ```
pub struct BackendSelector<B> {
    namespace: Namespace,
    preferred: BackendKind,
    candidates: Vec<(BackendKind, Opener<B>)>,
}

impl<B: KeyValueBackend> BackendSelector<B> {
    /// Creates a selector whose probe writes inside `namespace`.
    #[must_use]
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            preferred: BackendKind::Persistent,
            candidates: Vec::new(),
        }
    }

    /// Skips every candidate stronger than `kind`.
    #[must_use]
    pub fn preferred(mut self, kind: BackendKind) -> Self {
        self.preferred = kind;
        self
    }

    /// Registers a candidate. `open` runs only if the candidate is reached.
    #[must_use]
    pub fn candidate<F>(mut self, kind: BackendKind, open: F) -> Self
    where
        F: FnOnce() -> StorageResult<B> + 'static,
    {
        self.candidates.push((kind, Box::new(open)));
        self
    }

    /// Runs the cascade, falling back to `fallback` if every candidate fails.
    pub fn select<F>(self, fallback: F) -> Selected<B>
    where
        F: FnOnce() -> B,
    {
        let probe_key = probe_key(&self.namespace);

        for (kind, open) in self.candidates {
            if kind < self.preferred {
                tracing::debug!(backend = %kind, preferred = %self.preferred, "skipping backend");
                continue;
            }

            let mut backend = match open() {
                Ok(backend) => backend,
                Err(e) => {
                    tracing::debug!(backend = %kind, error = %e, "backend failed to open");
                    continue;
                }
            };

            match probe(&mut backend, &probe_key) {
                Ok(()) => {
                    tracing::info!(backend = %kind, namespace = %self.namespace, "selected preference backend");
                    return Selected { kind, backend };
                }
                Err(e) => {
                    tracing::warn!(backend = %kind, error = %e, "backend failed probe");
                }
            }
        }

        tracing::info!(namespace = %self.namespace, "falling back to in-memory preferences");
        Selected {
            kind: BackendKind::Memory,
            backend: fallback(),
        }
    }
}

/// Checks that `backend` accepts a write and reads it back.
///
/// Writes a sentinel under `key`, reads it, then removes it. The sentinel is
/// removed even when the read fails.
///
/// # Errors
///
/// Returns the first storage error, or [`StorageError::Unavailable`] if the
/// value read back differs from the one written.
pub fn probe<B: KeyValueBackend + ?Sized>(backend: &mut B, key: &str) -> StorageResult<()> {
    backend.set(key, PROBE_VALUE)?;
    let read = backend.get(key);
    let removed = backend.remove(key);

    match read? {
        Some(value) if value == PROBE_VALUE => {}
        other => {
            return Err(StorageError::Unavailable(format!(
                "probe read back {other:?}"
            )))
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefstore_storage::InMemoryBackend;

    /// Accepts writes but never returns them.
    struct Forgetful;

    impl KeyValueBackend for Forgetful {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
            Ok(())
        }
        fn remove(&mut self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
        fn keys(&self) -> StorageResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    fn unavailable() -> StorageResult<Box<dyn KeyValueBackend>> {
        Err(StorageError::Unavailable("test".into()))
    }

    #[test]
    fn first_working_candidate_wins() {
        let selected = BackendSelector::new(Namespace::default())
            .candidate(BackendKind::Persistent, || Ok(InMemoryBackend::new()))
            .candidate(BackendKind::Session, || Ok(InMemoryBackend::new()))
            .select(InMemoryBackend::new);
        assert_eq!(selected.kind, BackendKind::Persistent);
    }

    #[test]
    fn open_failure_falls_through() {
        let selected = BackendSelector::new(Namespace::default())
            .candidate(BackendKind::Persistent, unavailable)
            .candidate(BackendKind::Session, || {
                Ok(Box::new(InMemoryBackend::new()) as Box<dyn KeyValueBackend>)
            })
            .select(|| Box::new(InMemoryBackend::new()));
        assert_eq!(selected.kind, BackendKind::Session);
    }

    #[test]
    fn probe_failure_falls_through() {
        let selected = BackendSelector::new(Namespace::default())
            .candidate(BackendKind::Persistent, || {
                Ok(Box::new(InMemoryBackend::with_quota(4)) as Box<dyn KeyValueBackend>)
            })
            .candidate(BackendKind::Session, || {
                Ok(Box::new(Forgetful) as Box<dyn KeyValueBackend>)
            })
            .select(|| Box::new(InMemoryBackend::new()));
        assert_eq!(selected.kind, BackendKind::Memory);
    }

    #[test]
    fn no_candidates_uses_fallback() {
        let selected = BackendSelector::<InMemoryBackend>::new(Namespace::default())
            .select(InMemoryBackend::new);
        assert_eq!(selected.kind, BackendKind::Memory);
    }

    #[test]
    fn preferred_skips_stronger_tiers_without_opening() {
        let selected = BackendSelector::new(Namespace::default())
            .preferred(BackendKind::Session)
            .candidate(BackendKind::Persistent, || -> StorageResult<InMemoryBackend> {
                panic!("persistent tier must not be opened")
            })
            .candidate(BackendKind::Session, || Ok(InMemoryBackend::new()))
            .select(InMemoryBackend::new);
        assert_eq!(selected.kind, BackendKind::Session);
    }

    #[test]
    fn preferred_memory_skips_everything() {
        let selected = BackendSelector::new(Namespace::default())
            .preferred(BackendKind::Memory)
            .candidate(BackendKind::Persistent, || Ok(InMemoryBackend::new()))
            .candidate(BackendKind::Session, || Ok(InMemoryBackend::new()))
            .select(InMemoryBackend::new);
        assert_eq!(selected.kind, BackendKind::Memory);
    }

    #[test]
    fn probe_leaves_no_sentinel() {
        let mut backend = InMemoryBackend::new();
        let key = probe_key(&Namespace::default());
        probe(&mut backend, &key).unwrap();
        assert!(backend.is_empty());
    }

    #[test]
    fn sentinel_key_is_outside_namespace() {
        let namespace = Namespace::default();
        let key = probe_key(&namespace);
        assert_eq!(key, "CCUserDefault__prefstore_probe__");
        assert_eq!(namespace.strip(&key), None);
        assert_ne!(key, namespace.key(PROBE_SUFFIX));
    }

    #[test]
    fn selection_keeps_caller_key_named_like_sentinel() {
        let mut backend = InMemoryBackend::new();
        let user_key = Namespace::default().key(PROBE_SUFFIX);
        backend.set(&user_key, "user-data").unwrap();
        let view = backend.clone();

        let selected = BackendSelector::new(Namespace::default())
            .candidate(BackendKind::Persistent, move || Ok(backend))
            .select(InMemoryBackend::new);

        assert_eq!(selected.kind, BackendKind::Persistent);
        assert_eq!(view.snapshot().get(&user_key).map(String::as_str), Some("user-data"));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn probe_rejects_forgetful_store() {
        let result = probe(&mut Forgetful, "k");
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
    }

    #[test]
    fn probe_rejects_full_store() {
        let mut backend = InMemoryBackend::with_quota(1);
        assert!(matches!(
            probe(&mut backend, "k"),
            Err(StorageError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn kind_ordering_and_names() {
        assert!(BackendKind::Persistent < BackendKind::Session);
        assert!(BackendKind::Session < BackendKind::Memory);
        assert_eq!(BackendKind::Session.to_string(), "session");
        assert_eq!(BackendKind::Memory as u32, 2);
    }
}
