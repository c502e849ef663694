//! The paper store trait and an in-memory implementation.

use crate::error::StoreResult;
use async_trait::async_trait;
use paperqa_core::types::Paper;

/// Read-only access to the paper knowledge graph.
///
/// Two query modes: the globally most recent papers, and papers connected
/// to a named topic node via the fixed `HAS_TOPIC` relationship.
#[async_trait]
pub trait PaperStore: Send + Sync {
    /// Get the store name.
    fn name(&self) -> &str;

    /// The most recent `limit` papers overall, newest first.
    async fn recent(&self, limit: usize) -> StoreResult<Vec<Paper>>;

    /// Papers linked to the named topic node, up to `limit`.
    async fn by_topic(&self, topic: &str, limit: usize) -> StoreResult<Vec<Paper>>;
}

/// An in-memory store for tests and demos.
///
/// Papers are held with an optional topic tag standing in for the
/// `HAS_TOPIC` relationship.
#[derive(Debug, Default)]
pub struct MemoryStore {
    papers: Vec<(Paper, Option<String>)>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paper with no topic link.
    pub fn with_paper(mut self, paper: Paper) -> Self {
        self.papers.push((paper, None));
        self
    }

    /// Add a paper linked to a topic.
    pub fn with_topic_paper(mut self, topic: &str, paper: Paper) -> Self {
        self.papers.push((paper, Some(topic.to_string())));
        self
    }

    /// Number of papers held.
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

#[async_trait]
impl PaperStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn recent(&self, limit: usize) -> StoreResult<Vec<Paper>> {
        let mut papers: Vec<Paper> = self.papers.iter().map(|(p, _)| p.clone()).collect();
        // Published timestamps are ISO-8601 strings, so lexicographic
        // order is chronological order.
        papers.sort_by(|a, b| b.published.cmp(&a.published));
        papers.truncate(limit);
        Ok(papers)
    }

    async fn by_topic(&self, topic: &str, limit: usize) -> StoreResult<Vec<Paper>> {
        Ok(self
            .papers
            .iter()
            .filter(|(_, t)| t.as_deref() == Some(topic))
            .map(|(p, _)| p.clone())
            .take(limit)
            .collect())
    }
}
