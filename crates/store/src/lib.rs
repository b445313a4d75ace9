//! Green And Blue Store - remote product-collection adapter.
//!
//! The catalog lives in a hosted Firestore collection; this crate is the
//! only place that talks to it. It provides:
//!
//! - [`CatalogStore`] - the create/read/update/delete contract
//! - [`FirestoreCatalog`] - the REST implementation
//! - [`MemoryCatalog`] - in-memory implementation for tests and tooling
//! - [`sync`] - snapshot refresh, seeding, and the periodic poll task
//!
//! # No optimistic mutation
//!
//! Callers never patch their local snapshot after a mutation. Every
//! change goes to the remote store first and comes back through
//! [`sync::refresh`], so the storefront and the admin panel always agree
//! on what the collection contains.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod firestore;
pub mod memory;
pub mod seed;
pub mod sync;

use async_trait::async_trait;
use green_blue_core::{Product, ProductId, ProductInput};

pub use error::StoreError;
pub use firestore::{FirestoreCatalog, FirestoreConfig};
pub use memory::MemoryCatalog;

/// Contract for the remote product collection.
///
/// The remote surface has no push channel, so callers poll [`list`] (see
/// [`sync`]) and treat every result as a full snapshot. Mutations are
/// explicit, tagged operations: create and update are distinct calls
/// chosen by the caller, never inferred from the payload.
///
/// [`list`]: CatalogStore::list
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch the full collection in remote order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Insert a new product; the store assigns the id.
    async fn create(&self, input: &ProductInput) -> Result<ProductId, StoreError>;

    /// Replace the persisted fields of an existing product.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when the record no longer
    /// exists (deleted elsewhere mid-edit) instead of resurrecting it.
    async fn update(&self, id: &ProductId, input: &ProductInput) -> Result<(), StoreError>;

    /// Delete a product. Deleting an id that is already gone succeeds.
    async fn delete(&self, id: &ProductId) -> Result<(), StoreError>;
}
