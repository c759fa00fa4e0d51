//! File-based storage backend for persistent storage.

use crate::backend::{footprint, footprint_after_set, KeyValueBackend};
use crate::error::{StorageError, StorageResult};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A file-based key/value backend.
///
/// The whole map is held in memory and mirrored to a single JSON object
/// file. Data survives process restarts.
///
/// # Durability
///
/// Every `set` and `remove` rewrites the file: the new contents go to a
/// sibling `.tmp` file which is synced and then renamed over the original.
/// A failed rewrite rolls the in-memory map back, so the backend never
/// reports state that is not on disk.
///
/// # Example
///
/// ```no_run
/// use prefstore_storage::{KeyValueBackend, FileBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::open(Path::new("prefs.json")).unwrap();
/// backend.set("CCUserDefault::volume", "0.8").unwrap();
/// ```
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl FileBackend {
    /// Opens the backend at `path`, loading existing entries.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if it does
    /// not hold a JSON object of strings.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let entries = match fs::read(path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "opened preference file");

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            quota: None,
        })
    }

    /// Opens the backend, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot
    /// be loaded.
    pub fn open_with_create_dirs(path: &Path) -> StorageResult<Self> {
        create_parent_dirs(path)?;
        Self::open(path)
    }

    /// Opens an empty backend at `path`, deleting any existing file.
    ///
    /// Parent directories are created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or an existing
    /// file cannot be deleted.
    pub fn create(path: &Path) -> StorageResult<Self> {
        create_parent_dirs(path)?;
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        tracing::debug!(path = %path.display(), "reset preference file");

        Ok(Self {
            path: path.to_path_buf(),
            entries: BTreeMap::new(),
            quota: None,
        })
    }

    /// Limits the total of key and value lengths to `limit` bytes.
    #[must_use]
    pub fn with_quota(mut self, limit: usize) -> Self {
        self.quota = Some(limit);
        self
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the backend holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persist(&self) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.entries)?;
        let temp = self.temp_path();

        let result = (|| -> StorageResult<()> {
            let mut file = File::create(&temp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
            fs::rename(&temp, &self.path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&temp);
        }
        result
    }

    fn restore(&mut self, key: &str, previous: Option<String>) {
        match previous {
            Some(old) => {
                self.entries.insert(key.to_string(), old);
            }
            None => {
                self.entries.remove(key);
            }
        }
    }
}

fn create_parent_dirs(path: &Path) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(limit) = self.quota {
            let current = footprint(self.entries.iter());
            let required = footprint_after_set(current, key, self.entries.get(key), value);
            if required > limit {
                return Err(StorageError::QuotaExceeded { required, limit });
            }
        }

        if self.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            self.restore(key, previous);
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist() {
            self.restore(key, Some(previous));
            return Err(e);
        }
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}
