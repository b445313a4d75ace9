//! Store error types.

use thiserror::Error;

/// Failure talking to the remote product collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the remote store.
    #[error("remote store returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The target document does not exist.
    #[error("product not found: {0}")]
    NotFound(String),

    /// The remote payload could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Whether this error means the target record is gone.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
