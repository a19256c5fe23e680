//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::storage::{FileStore, SharedStorage};
use crate::stores::{CartStore, SessionStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Both stores hold the same storage backend,
/// each addressing its own fixed key.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    carts: CartStore,
    sessions: SessionStore,
}

impl AppState {
    /// Create the application state over the file backend named in `config`.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storage: SharedStorage = Arc::new(FileStore::open(config.data_file.clone()));
        Self::with_storage(config, storage)
    }

    /// Create the application state over an explicit backend.
    ///
    /// Tests use this with the in-memory backend.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: SharedStorage) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::sample_menu(),
                carts: CartStore::new(Arc::clone(&storage)),
                sessions: SessionStore::new(storage),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the menu catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }
}
