//! Prelude for convenient imports.
//!
//! ```rust
//! use paperqa_core::prelude::*;
//! ```

pub use crate::types::{CandidateAnswer, Paper, QaResult, NO_PAPERS_FALLBACK};
