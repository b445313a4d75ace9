//! Gate middleware and extractors for the admin panel.
//!
//! Provides an extractor that requires the panel to be unlocked in the
//! current session.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use green_blue_core::gate::AdminGate;

use crate::models::session::gate_flag;

/// Extractor that requires an unlocked admin gate.
///
/// If the panel is locked, returns a redirect to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _gate: RequireAdminGate,
/// ) -> impl IntoResponse {
///     // only reached with the panel unlocked
/// }
/// ```
pub struct RequireAdminGate;

/// Error returned when the gate is locked.
pub enum GateRejection {
    /// Redirect to login page.
    RedirectToLogin,
    /// No session available on the request.
    Unauthorized,
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminGate
where
    S: Send + Sync,
{
    type Rejection = GateRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(GateRejection::Unauthorized)?;

        let gate = AdminGate::from_session(gate_flag(session).await);
        if gate.is_unlocked() {
            Ok(Self)
        } else {
            Err(GateRejection::RedirectToLogin)
        }
    }
}
