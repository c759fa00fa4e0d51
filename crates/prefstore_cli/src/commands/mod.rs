//! CLI command implementations.

pub mod clear;
pub mod get;
pub mod list;
pub mod remove;
pub mod set;

use prefstore_core::Namespace;
use prefstore_storage::FileBackend;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Result type shared by every command.
pub type CommandResult<T = ()> = Result<T, Box<dyn Error>>;

/// The preference file and namespace a command operates on.
#[derive(Debug, Clone)]
pub struct Target {
    /// Preference file.
    pub path: PathBuf,
    /// Key namespace.
    pub namespace: Namespace,
}

impl Target {
    /// Creates a target, validating the namespace.
    pub fn new(path: &Path, namespace: &str) -> CommandResult<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            namespace: Namespace::new(namespace)?,
        })
    }

    /// Opens the file for reading; a missing file is an error.
    pub fn open_existing(&self) -> CommandResult<FileBackend> {
        if !self.path.exists() {
            return Err(format!("No preference file at {}", self.path.display()).into());
        }
        Ok(FileBackend::open(&self.path)?)
    }

    /// Opens the file for writing, creating it and its directories.
    pub fn open_for_write(&self) -> CommandResult<FileBackend> {
        Ok(FileBackend::open_with_create_dirs(&self.path)?)
    }
}
