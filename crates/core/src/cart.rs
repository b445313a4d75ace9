//! Session cart state machine.
//!
//! The cart is an ordered collection of lines, each wrapping a full
//! product snapshot taken at add time. There is no quantity field:
//! adding the same product twice yields two independent lines. The cart
//! lives only in the visitor's session and is never persisted remotely.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Product;

/// Identifier for one cart line, unique within the session.
///
/// Assigned from a monotonic per-cart counter; unrelated to
/// [`crate::types::ProductId`] and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLineId(u64);

impl CartLineId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CartLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product placed in the cart, independently removable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub line_id: CartLineId,
    /// Snapshot at add time; later catalog edits do not touch it.
    pub product: Product,
}

/// Error adding a product to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The product carries an explicit zero stock.
    #[error("product is out of stock: {0}")]
    OutOfStock(String),
}

/// The visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_line_id: u64,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_line_id: 0,
        }
    }

    /// Append a new line for `product`.
    ///
    /// Only an explicit zero stock is rejected; a product with unknown
    /// stock is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::OutOfStock`] when `product.stock == Some(0)`;
    /// the cart is left unchanged.
    pub fn add(&mut self, product: Product) -> Result<CartLineId, CartError> {
        if !product.is_purchasable() {
            return Err(CartError::OutOfStock(product.name));
        }
        let line_id = CartLineId(self.next_line_id);
        self.next_line_id += 1;
        self.lines.push(CartLine { line_id, product });
        Ok(line_id)
    }

    /// Remove the line with the given id; no-op when it is not present.
    pub fn remove(&mut self, line_id: CartLineId) {
        self.lines.retain(|line| line.line_id != line_id);
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line prices. Recomputed on every call, never cached.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines.iter().map(|line| line.product.price).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Category, ProductId};

    fn product(id: &str, name: &str, price: u64, stock: Option<u64>) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: Category::Cctv,
            price,
            image: "https://images.example.com/p.jpg".to_string(),
            stock,
            description: None,
        }
    }

    #[test]
    fn test_duplicate_adds_get_distinct_line_ids() {
        let mut cart = Cart::new();
        let p = product("p1", "Cámara IP 4MP", 250_000, Some(3));

        let first = cart.add(p.clone()).unwrap();
        let second = cart.add(p).unwrap();

        assert_ne!(first, second);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 500_000);
    }

    #[test]
    fn test_remove_targets_a_single_line() {
        let mut cart = Cart::new();
        let p = product("p1", "Cámara IP 4MP", 250_000, Some(3));
        let first = cart.add(p.clone()).unwrap();
        let second = cart.add(p).unwrap();

        cart.remove(first);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].line_id, second);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("p1", "Grabador NVR 8ch", 400_000, None))
            .unwrap();

        cart.remove(CartLineId::new(99));

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_zero_stock_is_rejected() {
        let mut cart = Cart::new();
        let err = cart
            .add(product("p1", "Panel de Control", 450_000, Some(0)))
            .unwrap_err();

        assert_eq!(err, CartError::OutOfStock("Panel de Control".to_string()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_stock_is_purchasable() {
        let mut cart = Cart::new();
        cart.add(product("p1", "Lector Biométrico", 320_000, None))
            .unwrap();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_line_ids_survive_session_round_trip() {
        let mut cart = Cart::new();
        cart.add(product("p1", "Cámara Domo PTZ", 550_000, Some(1)))
            .unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let mut back: Cart = serde_json::from_str(&json).unwrap();

        // The counter must not restart after deserialization.
        let next = back
            .add(product("p2", "Cámara IP 4MP", 250_000, Some(1)))
            .unwrap();
        assert_eq!(next, CartLineId::new(1));
    }
}
