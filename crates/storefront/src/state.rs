//! Application state shared across handlers.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use green_blue_core::catalog::{Catalog, Subscription};
use green_blue_store::{CatalogStore, FirestoreCatalog, sync};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the catalog snapshot and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Arc<dyn CatalogStore>,
    catalog: Catalog,
    /// Keeps the catalog log observer registered for the process lifetime.
    _catalog_log: Subscription,
}

impl AppState {
    /// Create a new application state talking to the remote collection.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store: Arc<dyn CatalogStore> = Arc::new(FirestoreCatalog::new(&config.firestore));
        Self::with_store(config, store)
    }

    /// Create application state over an arbitrary store (used by tests).
    #[must_use]
    pub fn with_store(config: StorefrontConfig, store: Arc<dyn CatalogStore>) -> Self {
        let catalog = Catalog::new();
        let catalog_log = catalog.subscribe(|products| {
            debug!(products = products.len(), "catalog snapshot replaced");
        });

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog,
                _catalog_log: catalog_log,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a handle to the remote product collection.
    #[must_use]
    pub fn store(&self) -> Arc<dyn CatalogStore> {
        Arc::clone(&self.inner.store)
    }

    /// Get a reference to the in-process catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Spawn the periodic catalog poll in the background.
    pub fn start_catalog_sync(&self) -> JoinHandle<()> {
        sync::spawn_refresh_task(
            self.store(),
            self.inner.catalog.clone(),
            self.inner.config.catalog_refresh,
        )
    }
}
