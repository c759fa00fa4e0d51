//! # PrefStore Storage
//!
//! Key/value storage backends for PrefStore.
//!
//! This crate provides the lowest-level storage abstraction. Backends are
//! **flat string maps** - they do not know about namespaces, typed values or
//! backend selection. `prefstore_core` owns all of that.
//!
//! ## Design Principles
//!
//! - Backends store string keys to string values (get, set, remove)
//! - A failed write leaves the previous state untouched
//! - No knowledge of key prefixes or value encodings
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - Process-lifetime map, the last-resort fallback
//! - [`FileBackend`] - JSON file on disk for the native persistent and
//!   session tiers
//!
//! ## Example
//!
//! ```rust
//! use prefstore_storage::{KeyValueBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! backend.set("volume", "0.8").unwrap();
//! assert_eq!(backend.get("volume").unwrap().as_deref(), Some("0.8"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::KeyValueBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
