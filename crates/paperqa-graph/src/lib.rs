//! # Paperqa Graph
//!
//! Read-only query wrapper around the paper knowledge graph. The store
//! answers two questions: "what are the most recent N papers overall?" and
//! "which papers hang off a named topic node?". Nothing here writes.
//!
//! The [`PaperStore`] trait is the retrieval seam the QA engine depends on;
//! [`Neo4jStore`] implements it against the Neo4j HTTP transaction endpoint
//! and [`MemoryStore`] backs tests and demos.

mod error;
mod neo4j;
mod store;

pub use error::{StoreError, StoreResult};
pub use neo4j::Neo4jStore;
pub use store::{MemoryStore, PaperStore};
