//! Key-value storage backends.
//!
//! The persisted state of the whole application is two string blobs behind
//! fixed keys (`delish_cart`, `delish_user`). Stores receive the backend as a
//! constructor argument, so the same store code runs against the JSON-file
//! backend in production and the in-memory fake in tests.
//!
//! A backend only moves opaque strings; interpreting a blob (and absorbing a
//! corrupt one) is the owning store's job.

pub mod file;
pub mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from a storage backend.
///
/// Only real I/O failures surface here. A missing key is `Ok(None)` and a
/// corrupt value is handled by the layer that understands the value.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string key-value backend.
///
/// Implementations must be safe to share across request handlers; interior
/// mutability is the implementation's concern.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a backend, as held by the stores.
pub type SharedStorage = Arc<dyn KeyValueStore>;
