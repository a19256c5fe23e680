//! Persisted cart store.

use std::sync::{Mutex, PoisonError};

use delish_core::{Cart, CatalogItem, ItemId, Price};

use crate::storage::{SharedStorage, StorageError};

/// Storage key for the serialized cart.
pub const CART_KEY: &str = "delish_cart";

/// The persisted cart, addressed by a fixed key on the injected backend.
///
/// Every mutation loads the current cart, applies the rule on
/// [`delish_core::Cart`], re-serializes the whole line sequence, and persists
/// it before returning - there is no line-level diffing. Mutations are
/// serialized behind an in-process lock; writers in other processes remain
/// last-writer-wins, the same limitation the original had across browser
/// tabs.
pub struct CartStore {
    storage: SharedStorage,
    // Makes load-mutate-persist atomic within this process.
    write_lock: Mutex<()>,
}

impl CartStore {
    /// Create a store over a backend.
    #[must_use]
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the current cart.
    ///
    /// Never fails the caller: a missing key is an empty cart, and a corrupt
    /// or unreadable blob is treated the same way (logged at warn).
    #[must_use]
    pub fn cart(&self) -> Cart {
        let raw = match self.storage.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(err) => {
                tracing::warn!("failed to read {CART_KEY}: {err}; treating as empty");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!("corrupt {CART_KEY} blob: {err}; treating as empty");
                Cart::new()
            }
        }
    }

    /// Add one unit of a catalog item, merging into an existing line.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated cart fails.
    pub fn add_item(&self, item: &CatalogItem) -> Result<Cart, StorageError> {
        self.mutate(|cart| cart.add(item))
    }

    /// Adjust a line's quantity by `delta`; a result of zero or below removes
    /// the line. A missing line is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated cart fails.
    pub fn change_quantity(&self, id: &ItemId, delta: i32) -> Result<Cart, StorageError> {
        self.mutate(|cart| cart.change_qty(id, delta))
    }

    /// Remove the line for `id` if present.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated cart fails.
    pub fn remove_item(&self, id: &ItemId) -> Result<Cart, StorageError> {
        self.mutate(|cart| cart.remove(id))
    }

    /// Reset the cart to empty.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated cart fails.
    pub fn clear(&self) -> Result<Cart, StorageError> {
        self.mutate(Cart::clear)
    }

    /// Sum of all line quantities, for the header badge.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.cart().total_count()
    }

    /// Sum of `price * qty` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart().total_price()
    }

    fn mutate(&self, apply: impl FnOnce(&mut Cart)) -> Result<Cart, StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut cart = self.cart();
        apply(&mut cart);
        self.persist(&cart)?;
        Ok(cart)
    }

    fn persist(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart).map_err(std::io::Error::from)?;
        self.storage.set(CART_KEY, &raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use delish_core::Price;

    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::MemoryStore;

    fn store_with_backend() -> (CartStore, SharedStorage) {
        let backend: SharedStorage = Arc::new(MemoryStore::new());
        (CartStore::new(Arc::clone(&backend)), backend)
    }

    fn item(id: &str) -> CatalogItem {
        Catalog::sample_menu().find(&ItemId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_first_access_is_an_empty_cart() {
        let (store, _) = store_with_backend();
        assert!(store.cart().is_empty());
        assert_eq!(store.total_count(), 0);
    }

    #[test]
    fn test_add_persists_immediately() {
        let (store, backend) = store_with_backend();
        store.add_item(&item("m1")).unwrap();

        let raw = backend.get(CART_KEY).unwrap().unwrap();
        let blob: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(blob.as_array().unwrap().len(), 1);
        assert_eq!(blob.get(0).unwrap().get("qty").unwrap(), 1);
    }

    #[test]
    fn test_menu_scenario_totals() {
        let (store, _) = store_with_backend();
        store.add_item(&item("m1")).unwrap();
        store.add_item(&item("m1")).unwrap();
        let cart = store.add_item(&item("m2")).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(store.total_count(), 3);
        assert_eq!(store.total_price(), Price::rupees(607));
    }

    #[test]
    fn test_change_quantity_down_to_zero_removes() {
        let (store, _) = store_with_backend();
        store.add_item(&item("m1")).unwrap();
        store.add_item(&item("m1")).unwrap();

        let cart = store.change_quantity(&ItemId::new("m1"), -2).unwrap();
        assert!(cart.is_empty());
        // And the persisted blob agrees after a fresh load.
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_change_quantity_unknown_id_is_a_noop() {
        let (store, _) = store_with_backend();
        store.add_item(&item("m1")).unwrap();
        let before = store.cart();

        let after = store.change_quantity(&ItemId::new("unknown-id"), 1).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_and_clear() {
        let (store, _) = store_with_backend();
        store.add_item(&item("m1")).unwrap();
        store.add_item(&item("m2")).unwrap();

        let cart = store.remove_item(&ItemId::new("m1")).unwrap();
        assert_eq!(cart.lines().len(), 1);

        let cart = store.clear().unwrap();
        assert!(cart.is_empty());
        assert_eq!(store.total_count(), 0);
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let (store, backend) = store_with_backend();
        backend.set(CART_KEY, "not valid json at all").unwrap();

        assert!(store.cart().is_empty());

        // A mutation on top of the corrupt blob starts from empty and
        // overwrites it with a valid one.
        let cart = store.add_item(&item("m3")).unwrap();
        assert_eq!(cart.lines().len(), 1);
        let raw = backend.get(CART_KEY).unwrap().unwrap();
        assert!(serde_json::from_str::<Cart>(&raw).is_ok());
    }

    #[test]
    fn test_roundtrip_through_backend_preserves_order() {
        let (store, backend) = store_with_backend();
        store.add_item(&item("m2")).unwrap();
        store.add_item(&item("m1")).unwrap();
        store.add_item(&item("m2")).unwrap();

        // A second store over the same backend sees the same lines.
        let other = CartStore::new(backend);
        let ids: Vec<String> = other
            .cart()
            .lines()
            .iter()
            .map(|line| line.id.to_string())
            .collect();
        assert_eq!(ids, vec!["m2", "m1"]);
        assert_eq!(other.cart().line(&ItemId::new("m2")).unwrap().qty, 2);
    }
}
