//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page
//! GET  /health            - Liveness check
//! GET  /health/ready      - Readiness check (catalog snapshot applied)
//!
//! # Shop
//! GET  /tienda            - Product listing (category filter + search)
//!
//! # Cart
//! GET  /carrito           - Cart page
//! POST /carrito/agregar   - Add a product to the cart
//! POST /carrito/quitar    - Remove one cart line
//! GET  /carrito/cotizar   - Redirect to the WhatsApp quote deep link
//! ```

pub mod cart;
pub mod home;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/agregar", post(cart::add))
        .route("/quitar", post(cart::remove))
        .route("/cotizar", get(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Shop
        .route("/tienda", get(shop::index))
        // Cart + checkout handoff
        .nest("/carrito", cart_routes())
}
