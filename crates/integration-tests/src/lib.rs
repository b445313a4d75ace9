//! Integration tests for Green And Blue.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p green-blue-integration-tests
//! ```
//!
//! The suite drives the full logic stack - store adapter → seeding/sync
//! → catalog snapshot → filter, cart and checkout - over the in-memory
//! store, so it runs without network access or credentials.
//!
//! The HTTP smoke tests in `tests/http_smoke.rs` are `#[ignore]`d by
//! default; they expect both binaries running locally:
//!
//! ```bash
//! cargo run -p green-blue-storefront &
//! cargo run -p green-blue-admin &
//! cargo test -p green-blue-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use green_blue_core::{Category, ProductInput};

/// Build a minimal valid product payload for tests.
#[must_use]
pub fn input(name: &str, category: Category, price: u64) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        category,
        price,
        image: format!("https://images.example.com/{}.jpg", name.to_lowercase().replace(' ', "-")),
        stock: None,
        description: None,
    }
}

/// Same as [`input`] but with an explicit stock count.
#[must_use]
pub fn input_with_stock(name: &str, category: Category, price: u64, stock: u64) -> ProductInput {
    ProductInput {
        stock: Some(stock),
        ..input(name, category, price)
    }
}
