//! Neo4j-backed paper store.
//!
//! Talks to the Neo4j HTTP transaction endpoint; the database itself is an
//! opaque query service from this crate's point of view.

use crate::error::{StoreError, StoreResult};
use crate::store::PaperStore;
use async_trait::async_trait;
use paperqa_core::types::Paper;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const RECENT_QUERY: &str = "MATCH (p:Paper) \
     RETURN p.title AS title, p.summary AS summary, p.published AS published, \
            p.link AS link, p.content AS content \
     ORDER BY p.published DESC LIMIT $limit";

const TOPIC_QUERY: &str = "MATCH (p:Paper)-[:HAS_TOPIC]->(t:Topic) WHERE t.name = $topic \
     RETURN p.title AS title, p.summary AS summary, p.published AS published \
     LIMIT $limit";

/// Transaction request body.
#[derive(Debug, Serialize)]
struct TxRequest {
    statements: Vec<TxStatement>,
}

#[derive(Debug, Serialize)]
struct TxStatement {
    statement: String,
    parameters: Value,
}

/// Transaction response body.
#[derive(Debug, Deserialize)]
struct TxResponse {
    #[serde(default)]
    results: Vec<TxResult>,
    #[serde(default)]
    errors: Vec<TxError>,
}

#[derive(Debug, Deserialize)]
struct TxResult {
    columns: Vec<String>,
    data: Vec<TxRow>,
}

#[derive(Debug, Deserialize)]
struct TxRow {
    row: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct TxError {
    code: String,
    message: String,
}

/// Paper store backed by a Neo4j database.
///
/// Opens a long-lived HTTP client at construction; queries are read-only.
///
/// # Example
///
/// ```rust,ignore
/// use paperqa_graph::{Neo4jStore, PaperStore};
///
/// let store = Neo4jStore::new("http://localhost:7474", "neo4j", "secret");
/// let papers = store.recent(5).await?;
/// ```
pub struct Neo4jStore {
    endpoint: String,
    database: String,
    user: String,
    password: String,
    client: reqwest::Client,
}

impl Neo4jStore {
    /// Create a store against a Neo4j HTTP endpoint.
    pub fn new(endpoint: &str, user: &str, password: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            database: "neo4j".to_string(),
            user: user.to_string(),
            password: password.to_string(),
            client,
        }
    }

    /// Select a database other than the default `neo4j`.
    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    /// Run one Cypher statement and map its rows to paper records.
    async fn run(&self, statement: &str, parameters: Value) -> StoreResult<Vec<Paper>> {
        let url = format!("{}/db/{}/tx/commit", self.endpoint, self.database);
        let request = TxRequest {
            statements: vec![TxStatement {
                statement: statement.to_string(),
                parameters,
            }],
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::InvalidResponse(format!(
                "Neo4j returned {}: {}",
                status, body
            )));
        }

        let resp: TxResponse = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        if let Some(err) = resp.errors.into_iter().next() {
            return Err(StoreError::Query {
                code: err.code,
                message: err.message,
            });
        }

        let result = resp
            .results
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::InvalidResponse("no result set".to_string()))?;

        Ok(papers_from_result(&result))
    }
}

#[async_trait]
impl PaperStore for Neo4jStore {
    fn name(&self) -> &str {
        "neo4j"
    }

    async fn recent(&self, limit: usize) -> StoreResult<Vec<Paper>> {
        tracing::debug!(limit, "querying most recent papers");
        self.run(RECENT_QUERY, json!({ "limit": limit })).await
    }

    async fn by_topic(&self, topic: &str, limit: usize) -> StoreResult<Vec<Paper>> {
        tracing::debug!(topic, limit, "querying papers by topic");
        self.run(TOPIC_QUERY, json!({ "topic": topic, "limit": limit }))
            .await
    }
}

/// Map one result set to paper records.
///
/// Missing or null `title`/`summary`/`published` columns map to the empty
/// string; `link` and `content` are optional by design (the topic query
/// does not return them).
fn papers_from_result(result: &TxResult) -> Vec<Paper> {
    let col = |name: &str| result.columns.iter().position(|c| c == name);

    let title_idx = col("title");
    let summary_idx = col("summary");
    let published_idx = col("published");
    let link_idx = col("link");
    let content_idx = col("content");

    let string_at = |row: &TxRow, idx: Option<usize>| -> String {
        idx.and_then(|i| row.row.get(i))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };

    result
        .data
        .iter()
        .map(|row| {
            let content = content_idx
                .and_then(|i| row.row.get(i))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string());

            Paper {
                title: string_at(row, title_idx),
                summary: string_at(row, summary_idx),
                published: string_at(row, published_idx),
                authors: Vec::new(),
                link: string_at(row, link_idx),
                content,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_configuration() {
        let store = Neo4jStore::new("http://localhost:7474/", "neo4j", "secret")
            .with_database("papers");
        assert_eq!(store.endpoint, "http://localhost:7474");
        assert_eq!(store.database, "papers");
    }

    #[test]
    fn test_papers_from_recent_rows() {
        let body = json!({
            "results": [{
                "columns": ["title", "summary", "published", "link", "content"],
                "data": [
                    { "row": ["T1", "S1", "2024-01-02", "http://a", null] },
                    { "row": ["T2", "S2", "2024-01-01", "http://b", "full text"] }
                ]
            }],
            "errors": []
        });

        let resp: TxResponse = serde_json::from_value(body).unwrap();
        let papers = papers_from_result(&resp.results[0]);

        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "T1");
        assert_eq!(papers[0].link, "http://a");
        assert!(papers[0].content.is_none());
        assert_eq!(papers[1].content.as_deref(), Some("full text"));
    }

    #[test]
    fn test_papers_from_topic_rows_have_no_link() {
        let body = json!({
            "results": [{
                "columns": ["title", "summary", "published"],
                "data": [ { "row": ["T", "S", "2024-01-01"] } ]
            }],
            "errors": []
        });

        let resp: TxResponse = serde_json::from_value(body).unwrap();
        let papers = papers_from_result(&resp.results[0]);

        assert_eq!(papers[0].title, "T");
        assert!(papers[0].link.is_empty());
        assert!(papers[0].content.is_none());
    }

    #[test]
    fn test_null_properties_map_to_empty() {
        let body = json!({
            "results": [{
                "columns": ["title", "summary", "published", "link", "content"],
                "data": [ { "row": [null, "S", "2024-01-01", null, null] } ]
            }],
            "errors": []
        });

        let resp: TxResponse = serde_json::from_value(body).unwrap();
        let papers = papers_from_result(&resp.results[0]);
        assert!(papers[0].title.is_empty());
        assert!(papers[0].link.is_empty());
    }

    #[test]
    fn test_server_error_deserializes() {
        let body = json!({
            "results": [],
            "errors": [{ "code": "Neo.ClientError.Statement.SyntaxError", "message": "bad" }]
        });

        let resp: TxResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.errors[0].code, "Neo.ClientError.Statement.SyntaxError");
    }
}
