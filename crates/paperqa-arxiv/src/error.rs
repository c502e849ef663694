//! Error types for the arXiv source.

use thiserror::Error;

/// Errors raised while fetching or parsing the arXiv feed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed feed: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("feed entry missing field: {0}")]
    MissingField(String),
}

/// Result type for arXiv source operations.
pub type SourceResult<T> = Result<T, SourceError>;
