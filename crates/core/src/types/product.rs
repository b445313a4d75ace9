//! Product model and admin-form validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Category;

/// Identifier assigned by the remote store when a product is created.
///
/// Opaque and stable for the lifetime of the record; also the target of
/// update and delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a remote document identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A sellable product as mirrored from the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Whole Colombian pesos, no minor unit.
    pub price: u64,
    /// Externally hosted image URL; presence-checked only.
    pub image: String,
    /// `None` means "unknown"; `Some(0)` means not available for purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Whether the product can be added to a cart.
    ///
    /// Only an explicit zero stock blocks the sale; unknown stock sells.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        !matches!(self.stock, Some(0))
    }
}

/// The persisted fields of a product, without its identifier.
///
/// Payload of both create and update operations against the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub category: Category,
    pub price: u64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductInput {
    /// Rebuild the full product once the remote store has assigned an id.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            image: self.image,
            stock: self.stock,
            description: self.description,
        }
    }
}

/// Validation failure for a staged admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("price must be greater than zero")]
    ZeroPrice,
    #[error("image URL must not be empty")]
    EmptyImage,
}

/// Raw fields staged in the admin create/edit form.
///
/// Nothing reaches the remote store until [`ProductDraft::validate`]
/// succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub price: u64,
    pub image: String,
    pub stock: Option<u64>,
    pub description: Option<String>,
}

impl ProductDraft {
    /// Check the required fields and produce the store payload.
    ///
    /// Name and image must be non-blank, price non-zero. Whitespace-only
    /// strings count as empty; an empty description becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`].
    pub fn validate(self) -> Result<ProductInput, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.price == 0 {
            return Err(ValidationError::ZeroPrice);
        }
        let image = self.image.trim().to_string();
        if image.is_empty() {
            return Err(ValidationError::EmptyImage);
        }
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(ProductInput {
            name,
            category: self.category,
            price: self.price,
            image,
            stock: self.stock,
            description,
        })
    }
}
