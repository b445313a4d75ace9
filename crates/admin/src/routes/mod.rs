//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog snapshot applied)
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Submit the panel password
//! POST /auth/logout            - Relock the panel
//!
//! # Catalog management (gated)
//! GET  /                       - Dashboard: stats + product grid
//! GET  /products/new           - Empty product form
//! POST /products               - Create a product (explicit insert)
//! GET  /products/{id}/edit     - Pre-filled product form
//! POST /products/{id}          - Update a product (explicit replace)
//! GET  /products/{id}/delete   - Delete confirmation page
//! POST /products/{id}/delete   - Perform the delete
//! GET  /export                 - Catalog snapshot as a JSON download
//! ```

pub mod auth;
pub mod export;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/products", post(products::create))
        .route("/products/new", get(products::new_form))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/edit", get(products::edit_form))
        .route(
            "/products/{id}/delete",
            get(products::confirm_delete).post(products::delete),
        )
        .route("/export", get(export::export))
        .merge(auth::router())
}
