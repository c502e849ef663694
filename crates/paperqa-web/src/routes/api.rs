//! REST API endpoints for paper search and question answering.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use paperqa_arxiv::DEFAULT_MAX_RESULTS;
use paperqa_core::types::{Paper, QaResult};
use paperqa_rag::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};

/// JSON error body returned with non-success statuses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

fn bad_gateway(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

/// arXiv search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub topic: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// Search arXiv for papers on a topic.
pub async fn search_papers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<Paper>> {
    let papers = state
        .arxiv
        .search(&params.topic, params.max_results)
        .await
        .map_err(bad_gateway)?;

    Ok(Json(papers))
}

/// Stored-paper query parameters.
#[derive(Debug, Deserialize)]
pub struct StoredParams {
    pub topic: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_TOP_K
}

/// Query the paper store: most recent overall, or by topic node.
pub async fn stored_papers(
    State(state): State<AppState>,
    Query(params): Query<StoredParams>,
) -> ApiResult<Vec<Paper>> {
    let papers = match &params.topic {
        Some(topic) => state.store.by_topic(topic, params.limit).await,
        None => state.store.recent(params.limit).await,
    }
    .map_err(bad_gateway)?;

    Ok(Json(papers))
}

/// Question request body.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Answer a question from the stored candidate papers.
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> ApiResult<QaResult> {
    let engine = state.engine(req.topic);
    let result = engine
        .generate_answer(&req.question)
        .await
        .map_err(bad_gateway)?;

    Ok(Json(result))
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub generator: String,
    pub available: bool,
}

/// Report whether the generation backend is reachable.
pub async fn health(State(state): State<AppState>) -> ApiResult<HealthResponse> {
    let available = state
        .generator
        .health_check()
        .await
        .map_err(bad_gateway)?;

    Ok(Json(HealthResponse {
        generator: state.generator.name().to_string(),
        available,
    }))
}
