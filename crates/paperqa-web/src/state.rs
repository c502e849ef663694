//! Application state for the web server.
//!
//! The arXiv client, store and generator handles are opened once at startup
//! and shared across requests; engines are thin per-request views over them.

use paperqa_arxiv::ArxivClient;
use paperqa_graph::PaperStore;
use paperqa_llm::Generator;
use paperqa_rag::QaEngine;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// arXiv search client.
    pub arxiv: ArxivClient,
    /// Paper store handle.
    pub store: Arc<dyn PaperStore>,
    /// Generation backend handle.
    pub generator: Arc<dyn Generator>,
}

impl AppState {
    /// Create the app state from the long-lived handles.
    pub fn new(
        arxiv: ArxivClient,
        store: Arc<dyn PaperStore>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self {
            arxiv,
            store,
            generator,
        }
    }

    /// Build a QA engine over the shared handles, retrieving from the
    /// given topic node when one is named.
    pub fn engine(&self, topic: Option<String>) -> QaEngine {
        let engine = QaEngine::new(self.store.clone(), self.generator.clone());
        match topic {
            Some(topic) => engine.with_topic(topic),
            None => engine,
        }
    }
}
