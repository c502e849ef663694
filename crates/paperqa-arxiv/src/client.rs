//! HTTP client for the arXiv export API.

use crate::error::SourceResult;
use crate::feed::parse_feed;
use paperqa_core::types::Paper;

const ARXIV_EXPORT_URL: &str = "http://export.arxiv.org";

/// Default number of results requested per topic search.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Client for the arXiv export API.
///
/// Holds a long-lived HTTP client; construct once and reuse.
///
/// # Example
///
/// ```rust,ignore
/// use paperqa_arxiv::ArxivClient;
///
/// let client = ArxivClient::new();
/// let papers = client.search("transformer models", 10).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ArxivClient {
    base_url: String,
    client: reqwest::Client,
}

impl ArxivClient {
    /// Create a client against the public arXiv export endpoint.
    pub fn new() -> Self {
        Self::with_base_url(ARXIV_EXPORT_URL)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Search arXiv for papers on a topic, most recent first.
    ///
    /// The upstream sorts by submission date descending. A non-success
    /// response is reported as an empty result set, not an error; transport
    /// failures and malformed feeds propagate.
    pub async fn search(&self, topic: &str, max_results: usize) -> SourceResult<Vec<Paper>> {
        let url = format!("{}/api/query", self.base_url);
        let search_query = format!("all:{}", topic);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("search_query", search_query.as_str()),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
                ("max_results", &max_results.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, topic, "arXiv query failed, returning no papers");
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        parse_feed(&body)
    }
}

impl Default for ArxivClient {
    fn default() -> Self {
        Self::new()
    }
}
