//! Core types shared across the paperqa crates.

use serde::{Deserialize, Serialize};

/// Answer returned when retrieval produces no candidate papers.
///
/// The accompanying confidence of 1.0 is a sentinel for "no attempt was
/// made", not a quality score. The fallback is distinguishable from a
/// genuine confident answer by its empty `sources`.
pub const NO_PAPERS_FALLBACK: &str =
    "I couldn't find any relevant papers to answer this question.";

/// A paper record as reported by an upstream source.
///
/// Immutable once fetched. Papers have no identity beyond title + link and
/// are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    pub title: String,
    /// Abstract text.
    pub summary: String,
    /// Publication timestamp, verbatim from the source.
    pub published: String,
    /// Author names in document order. Populated only by the arXiv source;
    /// the graph store does not return authors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// Canonical URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    /// Full-text content. Only some graph nodes carry one; absence means
    /// the empty string at prompt time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Paper {
    /// Create a paper with just a title and summary.
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            published: String::new(),
            authors: Vec::new(),
            link: String::new(),
            content: None,
        }
    }

    /// Set the publication timestamp.
    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = published.into();
        self
    }

    /// Set the author list.
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Set the canonical link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Set the full-text content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// One generated answer, tied to the paper it was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAnswer {
    /// The generated answer text.
    pub answer: String,
    /// Self-reported confidence, nominally in [0, 1]. The raw-text
    /// generator adapter pins this to 1.0 for every answer.
    pub confidence: f64,
    /// Title of the paper the answer was generated from.
    pub source: String,
}

impl CandidateAnswer {
    pub fn new(answer: impl Into<String>, confidence: f64, source: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            confidence,
            source: source.into(),
        }
    }
}

/// The final result of answering one question.
///
/// Constructed and returned per question; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaResult {
    /// The top-ranked candidate's answer.
    pub answer: String,
    /// One paper title per candidate considered, in retrieval order.
    /// Only the primary answer and the alternatives are reordered by
    /// confidence; this list is not.
    pub sources: Vec<String>,
    /// The top-ranked candidate's confidence.
    pub confidence: f64,
    /// All ranked candidates but the first. Absent (not an empty list)
    /// when at most one candidate existed. Truncation to "top 2" is a
    /// display concern and does not happen here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_answers: Option<Vec<CandidateAnswer>>,
}

impl QaResult {
    /// The fixed result for an empty candidate set.
    pub fn fallback() -> Self {
        Self {
            answer: NO_PAPERS_FALLBACK.to_string(),
            sources: Vec::new(),
            confidence: 1.0,
            alternative_answers: None,
        }
    }

    /// Whether this is the empty-candidate fallback rather than a
    /// generated answer.
    pub fn is_fallback(&self) -> bool {
        self.sources.is_empty()
    }
}
