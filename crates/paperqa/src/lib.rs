//! # Paperqa
//!
//! Preprint retrieval and question answering over a paper knowledge graph.
//!
//! Paperqa fetches papers from the arXiv export API, reads a Neo4j graph of
//! stored papers and topics, and answers questions about the stored papers
//! by generating one candidate answer per paper and ranking the candidates
//! by self-reported confidence.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use paperqa::prelude::*;
//!
//! // Long-lived handles, opened once.
//! let store = Arc::new(Neo4jStore::new("http://localhost:7474", "neo4j", "secret"));
//! let generator = Arc::new(OllamaGenerator::localhost().with_model("mistral"));
//!
//! // Ask a question against the five most recent stored papers.
//! let engine = QaEngine::new(store, generator);
//! let result = engine.generate_answer("What limits spiking network depth?").await?;
//!
//! println!("{}", result.answer);
//! println!("Sources: {}", result.sources.join(", "));
//! println!("Confidence: {:.2}%", result.confidence * 100.0);
//! ```
//!
//! ## Architecture
//!
//! Paperqa is organized into several crates:
//!
//! - [`paperqa_core`] - Shared domain types (`Paper`, `CandidateAnswer`, `QaResult`)
//! - [`paperqa_arxiv`] - arXiv Atom feed client
//! - [`paperqa_graph`] - Read-only Neo4j paper store
//! - [`paperqa_llm`] - Generation backends behind the `Generator` trait
//! - [`paperqa_rag`] - The retrieve-prompt-generate-rank engine
//!
//! ## Generation backends
//!
//! The engine consumes generation polymorphically. Two adapters ship:
//!
//! | Backend | Output | Confidence |
//! |---------|--------|------------|
//! | Ollama  | JSON, schema-validated | model-reported, coerced to [0, 1] |
//! | Claude  | raw text | fixed 1.0 (ranking degenerates to retrieval order) |

// Re-export all subcrates
pub use paperqa_arxiv as arxiv;
pub use paperqa_core as core;
pub use paperqa_graph as graph;
pub use paperqa_llm as llm;
pub use paperqa_rag as rag;

/// Prelude module for convenient imports.
///
/// ```rust
/// use paperqa::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use paperqa_core::types::{CandidateAnswer, Paper, QaResult, NO_PAPERS_FALLBACK};

    // Paper source
    pub use paperqa_arxiv::{ArxivClient, SourceError, SourceResult};

    // Paper store
    pub use paperqa_graph::{MemoryStore, Neo4jStore, PaperStore, StoreError, StoreResult};

    // Generation
    pub use paperqa_llm::{
        AnswerPrompt, ClaudeGenerator, Generation, Generator, GeneratorConfig, LlmError,
        LlmResult, MockGenerator, OllamaGenerator, PromptTemplate,
    };

    // QA engine
    pub use paperqa_rag::{QaEngine, QaError, Retrieval, DEFAULT_TOP_K};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_prelude_wires_the_whole_flow() {
        let store = Arc::new(
            MemoryStore::new()
                .with_paper(Paper::new("T", "S").with_published("2024-01-01")),
        );
        let generator = Arc::new(MockGenerator::new().with_generation("T", "An answer.", 0.9));

        let engine = QaEngine::new(store, generator);
        let result = engine.generate_answer("q?").await.unwrap();

        assert_eq!(result.answer, "An answer.");
        assert_eq!(result.sources, vec!["T".to_string()]);
    }
}
