//! HTTP middleware stack for the admin panel.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions, in-memory store, `SameSite=Strict`)

pub mod auth;
pub mod session;

pub use auth::RequireAdminGate;
pub use session::create_session_layer;
