//! In-memory implementation of [`CatalogStore`].
//!
//! Used by the integration tests and the CLI dry-run mode. Preserves
//! insertion order like the remote listing does, and can be switched
//! "offline" to exercise remote-failure paths.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use green_blue_core::{Product, ProductId, ProductInput};

use crate::CatalogStore;
use crate::error::StoreError;

/// In-memory product collection.
#[derive(Default)]
pub struct MemoryCatalog {
    products: Mutex<Vec<Product>>,
    next_id: AtomicU64,
    offline: AtomicBool,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the collection.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            next_id: AtomicU64::new(0),
            offline: AtomicBool::new(false),
        }
    }

    /// Make every subsequent operation fail as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Status {
                status: 503,
                body: "memory store is offline".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.check_online()?;
        let products = self.products.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(products.clone())
    }

    async fn create(&self, input: &ProductInput) -> Result<ProductId, StoreError> {
        self.check_online()?;
        let id = ProductId::new(format!("mem-{}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        let mut products = self.products.lock().unwrap_or_else(PoisonError::into_inner);
        products.push(input.clone().into_product(id.clone()));
        Ok(id)
    }

    async fn update(&self, id: &ProductId, input: &ProductInput) -> Result<(), StoreError> {
        self.check_online()?;
        let mut products = self.products.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(existing) = products.iter_mut().find(|p| &p.id == id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        *existing = input.clone().into_product(id.clone());
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        self.check_online()?;
        let mut products = self.products.lock().unwrap_or_else(PoisonError::into_inner);
        products.retain(|p| &p.id != id);
        Ok(())
    }
}
