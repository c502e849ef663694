//! # Paperqa Core
//!
//! Shared domain types for the paperqa crates: the [`Paper`](types::Paper)
//! record that flows from the arXiv feed and the graph store into the QA
//! engine, and the answer shapes the engine produces.
//!
//! ## Quick Start
//!
//! ```rust
//! use paperqa_core::prelude::*;
//!
//! let paper = Paper::new("Attention Is All You Need", "We propose the Transformer...")
//!     .with_published("2017-06-12T17:57:34Z")
//!     .with_link("http://arxiv.org/abs/1706.03762v1");
//!
//! assert!(paper.content.is_none());
//! ```

pub mod types;
pub mod prelude;
