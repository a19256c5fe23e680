//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{KeyValueStore, StorageError};

/// A `HashMap`-backed store for tests and ephemeral runs.
///
/// Nothing survives the process; this is the in-memory fake the stores are
/// tested against.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("delish_cart").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("delish_cart", "[]").unwrap();
        assert_eq!(store.get("delish_cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_replaces() {
        let store = MemoryStore::new();
        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("delish_user", "{}").unwrap();
        store.remove("delish_user").unwrap();
        assert_eq!(store.get("delish_user").unwrap(), None);

        // Removing an absent key is fine.
        store.remove("delish_user").unwrap();
    }
}
