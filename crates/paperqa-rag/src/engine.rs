//! The QA orchestration flow: retrieve, prompt, generate, rank.

use paperqa_core::types::{CandidateAnswer, Paper, QaResult};
use paperqa_graph::{PaperStore, StoreError};
use paperqa_llm::{AnswerPrompt, Generator, LlmError, PromptTemplate};
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;

/// Default number of candidate papers retrieved per question.
pub const DEFAULT_TOP_K: usize = 5;

/// Errors raised while answering a question.
///
/// A single store or generation failure aborts the whole request; there is
/// no partial-failure recovery and no retry.
#[derive(Debug, Error)]
pub enum QaError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("generation error: {0}")]
    Generation(#[from] LlmError),
}

/// How candidate papers are retrieved.
///
/// Retrieval looks only at recency or the configured topic; the question
/// text plays no part in which papers come back.
#[derive(Debug, Clone)]
pub enum Retrieval {
    /// The most recent papers overall.
    Recent,
    /// Papers linked to a named topic node.
    Topic(String),
}

/// The question-answering engine.
///
/// Holds the long-lived store and generator handles, both acquired at
/// construction and reused across sequential calls.
pub struct QaEngine {
    store: Arc<dyn PaperStore>,
    generator: Arc<dyn Generator>,
    retrieval: Retrieval,
    top_k: usize,
}

impl QaEngine {
    /// Create an engine retrieving by recency.
    pub fn new(store: Arc<dyn PaperStore>, generator: Arc<dyn Generator>) -> Self {
        Self {
            store,
            generator,
            retrieval: Retrieval::Recent,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Retrieve candidates from a topic node instead of by recency.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.retrieval = Retrieval::Topic(topic.into());
        self
    }

    /// Set how many candidate papers to retrieve.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Get the generator name (for health/status reporting).
    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Check whether the generation backend is reachable.
    pub async fn health_check(&self) -> Result<bool, QaError> {
        Ok(self.generator.health_check().await?)
    }

    /// Answer a question from the candidate papers.
    ///
    /// One generation call per candidate, sequentially, in retrieval order;
    /// a generation failure aborts the whole request. With no candidates
    /// the fixed fallback result comes back instead of an error.
    pub async fn generate_answer(&self, question: &str) -> Result<QaResult, QaError> {
        let papers = self.candidates().await?;

        if papers.is_empty() {
            tracing::info!("no candidate papers, returning fallback answer");
            return Ok(QaResult::fallback());
        }

        tracing::debug!(
            candidates = papers.len(),
            generator = self.generator.name(),
            "generating answers"
        );

        let mut candidates = Vec::with_capacity(papers.len());
        for paper in &papers {
            let prompt = AnswerPrompt::new(paper, question).generate();
            let generation = self.generator.generate(&prompt).await?;
            candidates.push(CandidateAnswer::new(
                generation.answer,
                generation.confidence,
                &paper.title,
            ));
        }

        // Source titles keep retrieval order; only the answer ranking
        // below reorders anything.
        let sources: Vec<String> = candidates.iter().map(|c| c.source.clone()).collect();

        let mut ranked = candidates;
        rank_candidates(&mut ranked);
        let best = ranked.remove(0);

        if ranked.is_empty() {
            Ok(QaResult {
                answer: best.answer,
                sources: vec![best.source],
                confidence: best.confidence,
                alternative_answers: None,
            })
        } else {
            Ok(QaResult {
                answer: best.answer,
                sources,
                confidence: best.confidence,
                alternative_answers: Some(ranked),
            })
        }
    }

    async fn candidates(&self) -> Result<Vec<Paper>, QaError> {
        let papers = match &self.retrieval {
            Retrieval::Recent => self.store.recent(self.top_k).await?,
            Retrieval::Topic(topic) => self.store.by_topic(topic, self.top_k).await?,
        };
        Ok(papers)
    }
}

/// Sort candidates by confidence, highest first.
///
/// The sort is stable: candidates with equal confidence keep their
/// retrieval order, which the alternatives list depends on. Incomparable
/// confidences compare equal.
pub fn rank_candidates(candidates: &mut [CandidateAnswer]) {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(answer: &str, confidence: f64) -> CandidateAnswer {
        CandidateAnswer::new(answer, confidence, format!("paper {}", answer))
    }

    #[test]
    fn test_ranking_orders_by_confidence() {
        let mut candidates = vec![candidate("a", 0.2), candidate("b", 0.8), candidate("c", 0.5)];
        rank_candidates(&mut candidates);

        let answers: Vec<&str> = candidates.iter().map(|c| c.answer.as_str()).collect();
        assert_eq!(answers, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        // Retrieval order [0.3, 0.9, 0.9, 0.1]: the first 0.9 stays ahead
        // of the second.
        let mut candidates = vec![
            candidate("a", 0.3),
            candidate("b", 0.9),
            candidate("c", 0.9),
            candidate("d", 0.1),
        ];
        rank_candidates(&mut candidates);

        let answers: Vec<&str> = candidates.iter().map(|c| c.answer.as_str()).collect();
        assert_eq!(answers, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_ranking_all_tied_keeps_retrieval_order() {
        // The raw-text adapter pins every confidence to 1.0; ranking must
        // then leave retrieval order untouched.
        let mut candidates = vec![candidate("a", 1.0), candidate("b", 1.0), candidate("c", 1.0)];
        rank_candidates(&mut candidates);

        let answers: Vec<&str> = candidates.iter().map(|c| c.answer.as_str()).collect();
        assert_eq!(answers, vec!["a", "b", "c"]);
    }
}
