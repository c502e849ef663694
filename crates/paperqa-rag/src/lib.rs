//! # Paperqa RAG
//!
//! The question-answering engine: retrieve candidate papers from the store,
//! build one prompt per paper, invoke the generation capability once per
//! candidate, and reduce the `(answer, confidence, source)` triples to a
//! single best answer plus ranked alternatives.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use paperqa_graph::Neo4jStore;
//! use paperqa_llm::OllamaGenerator;
//! use paperqa_rag::QaEngine;
//!
//! let store = Arc::new(Neo4jStore::new("http://localhost:7474", "neo4j", "secret"));
//! let generator = Arc::new(OllamaGenerator::localhost());
//!
//! let engine = QaEngine::new(store, generator);
//! let result = engine.generate_answer("What is a spiking network?").await?;
//! println!("{} ({:.0}%)", result.answer, result.confidence * 100.0);
//! ```

mod engine;

pub use engine::{rank_candidates, QaEngine, QaError, Retrieval, DEFAULT_TOP_K};
