//! Catalog export route handler.
//!
//! Serves the current catalog snapshot as a pretty-printed JSON
//! download. There is deliberately no import counterpart.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminGate;
use crate::state::AppState;

/// Filename offered for the download.
const EXPORT_FILENAME: &str = "productos_green_blue.json";

/// Download the catalog as JSON.
///
/// GET /export
#[instrument(skip(_gate, state))]
pub async fn export(_gate: RequireAdminGate, State(state): State<AppState>) -> Result<Response> {
    let snapshot = state.catalog().snapshot();

    let json = serde_json::to_string_pretty(snapshot.as_ref())
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        json,
    )
        .into_response())
}
