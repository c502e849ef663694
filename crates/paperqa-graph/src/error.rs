//! Error types for the paper store.

use thiserror::Error;

/// Errors raised while querying the paper store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("query failed: {code}: {message}")]
    Query { code: String, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
