//! End-to-end tests for the QA engine over in-memory store and mock
//! generator implementations.

use paperqa_core::types::{Paper, NO_PAPERS_FALLBACK};
use paperqa_graph::MemoryStore;
use paperqa_llm::MockGenerator;
use paperqa_rag::{QaEngine, QaError};
use std::sync::Arc;

fn paper(title: &str, summary: &str, published: &str) -> Paper {
    Paper::new(title, summary).with_published(published)
}

#[tokio::test]
async fn empty_store_returns_fallback() {
    let engine = QaEngine::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MockGenerator::new()),
    );

    let result = engine.generate_answer("anything?").await.unwrap();

    assert_eq!(result.answer, NO_PAPERS_FALLBACK);
    assert!(result.sources.is_empty());
    assert_eq!(result.confidence, 1.0);
    assert!(result.alternative_answers.is_none());
}

#[tokio::test]
async fn fallback_is_distinguishable_from_confident_answer() {
    let empty_engine = QaEngine::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MockGenerator::new()),
    );
    let fallback = empty_engine.generate_answer("q?").await.unwrap();

    let confident_engine = QaEngine::new(
        Arc::new(MemoryStore::new().with_paper(paper("Only", "S", "2024-01-01"))),
        Arc::new(MockGenerator::new().with_generation("Only", "A certain answer.", 1.0)),
    );
    let confident = confident_engine.generate_answer("q?").await.unwrap();

    // Both carry confidence 1.0; the sentinel is told apart by its empty
    // sources, never by the score.
    assert_eq!(fallback.confidence, confident.confidence);
    assert!(fallback.is_fallback());
    assert!(!confident.is_fallback());
}

#[tokio::test]
async fn single_candidate_has_no_alternatives() {
    let store = MemoryStore::new().with_paper(paper("Solo Paper", "S", "2024-01-01"));
    let generator = MockGenerator::new().with_generation("Solo Paper", "The answer.", 0.7);

    let engine = QaEngine::new(Arc::new(store), Arc::new(generator));
    let result = engine.generate_answer("what?").await.unwrap();

    assert_eq!(result.answer, "The answer.");
    assert_eq!(result.sources, vec!["Solo Paper".to_string()]);
    assert!((result.confidence - 0.7).abs() < 1e-9);
    assert!(result.alternative_answers.is_none());
}

#[tokio::test]
async fn best_answer_wins_and_rest_become_alternatives() {
    // Retrieval order is newest-first: P1, P2, P3.
    let store = MemoryStore::new()
        .with_paper(paper("P1", "S1", "2024-03-01"))
        .with_paper(paper("P2", "S2", "2024-02-01"))
        .with_paper(paper("P3", "S3", "2024-01-01"));
    let generator = MockGenerator::new()
        .with_generation("P1", "answer one", 0.4)
        .with_generation("P2", "answer two", 0.9)
        .with_generation("P3", "answer three", 0.6);

    let engine = QaEngine::new(Arc::new(store), Arc::new(generator));
    let result = engine.generate_answer("what?").await.unwrap();

    assert_eq!(result.answer, "answer two");
    assert!((result.confidence - 0.9).abs() < 1e-9);

    // Sources keep retrieval order even though the answers were reranked.
    assert_eq!(
        result.sources,
        vec!["P1".to_string(), "P2".to_string(), "P3".to_string()]
    );

    let alternatives = result.alternative_answers.unwrap();
    assert_eq!(alternatives.len(), 2);
    assert_eq!(alternatives[0].answer, "answer three");
    assert_eq!(alternatives[1].answer, "answer one");
}

#[tokio::test]
async fn tied_confidences_keep_retrieval_order() {
    let store = MemoryStore::new()
        .with_paper(paper("P1", "S1", "2024-04-01"))
        .with_paper(paper("P2", "S2", "2024-03-01"))
        .with_paper(paper("P3", "S3", "2024-02-01"))
        .with_paper(paper("P4", "S4", "2024-01-01"));
    let generator = MockGenerator::new()
        .with_generation("P1", "a", 0.3)
        .with_generation("P2", "b", 0.9)
        .with_generation("P3", "c", 0.9)
        .with_generation("P4", "d", 0.1);

    let engine = QaEngine::new(Arc::new(store), Arc::new(generator));
    let result = engine.generate_answer("what?").await.unwrap();

    // The 0.9 retrieved first stays first among the ties.
    assert_eq!(result.answer, "b");
    let alternatives = result.alternative_answers.unwrap();
    let order: Vec<&str> = alternatives.iter().map(|a| a.answer.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "d"]);
}

#[tokio::test]
async fn confidence_is_the_maximum_generated() {
    let store = MemoryStore::new()
        .with_paper(paper("P1", "S1", "2024-02-01"))
        .with_paper(paper("P2", "S2", "2024-01-01"));
    let generator = MockGenerator::new()
        .with_generation("P1", "a", 0.35)
        .with_generation("P2", "b", 0.85);

    let engine = QaEngine::new(Arc::new(store), Arc::new(generator));
    let result = engine.generate_answer("what?").await.unwrap();

    assert!((result.confidence - 0.85).abs() < 1e-9);
    assert_eq!(result.alternative_answers.unwrap().len(), 1);
}

#[tokio::test]
async fn topic_retrieval_limits_candidates() {
    let mut store = MemoryStore::new();
    for i in 0..8 {
        store = store.with_topic_paper(
            "ml",
            paper(&format!("P{}", i), "S", &format!("2024-01-0{}", i + 1)),
        );
    }

    let engine = QaEngine::new(Arc::new(store), Arc::new(MockGenerator::new())).with_topic("ml");
    let result = engine.generate_answer("what?").await.unwrap();

    // Up to five candidates are considered, one source per candidate.
    assert_eq!(result.sources.len(), 5);
}

#[tokio::test]
async fn generation_failure_aborts_the_request() {
    let store = MemoryStore::new()
        .with_paper(paper("Good Paper", "S", "2024-02-01"))
        .with_paper(paper("Bad Paper", "S", "2024-01-01"));
    let generator = MockGenerator::new()
        .with_generation("Good Paper", "fine", 0.9)
        .with_failure("Bad Paper");

    let engine = QaEngine::new(Arc::new(store), Arc::new(generator));
    let err = engine.generate_answer("what?").await.unwrap_err();

    assert!(matches!(err, QaError::Generation(_)));
}

#[tokio::test]
async fn question_text_reaches_the_generator_verbatim() {
    let store = MemoryStore::new().with_paper(paper("P", "S", "2024-01-01"));
    let generator =
        MockGenerator::new().with_generation("why is the sky blue?", "Rayleigh scattering.", 0.8);

    let engine = QaEngine::new(Arc::new(store), Arc::new(generator));
    let result = engine.generate_answer("why is the sky blue?").await.unwrap();

    assert_eq!(result.answer, "Rayleigh scattering.");
}
