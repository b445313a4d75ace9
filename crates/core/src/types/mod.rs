//! Core types for Green And Blue.
//!
//! This module provides the product model shared by the storefront, the
//! admin panel, and the store adapter.

pub mod category;
pub mod product;

pub use category::{Category, UnknownCategory};
pub use product::{Product, ProductDraft, ProductId, ProductInput, ValidationError};
