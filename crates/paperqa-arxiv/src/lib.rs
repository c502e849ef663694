//! # Paperqa arXiv
//!
//! Client for the arXiv export API. Issues a topic search against the
//! Atom feed endpoint and normalizes each entry into a
//! [`Paper`](paperqa_core::types::Paper).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paperqa_arxiv::ArxivClient;
//!
//! let client = ArxivClient::new();
//! let papers = client.search("graph neural networks", 10).await?;
//! ```

mod client;
mod error;
mod feed;

pub use client::{ArxivClient, DEFAULT_MAX_RESULTS};
pub use error::{SourceError, SourceResult};
pub use feed::parse_feed;
