//! Claude generator — the raw-text adapter.
//!
//! Requires an Anthropic API key. The completion text is returned verbatim
//! as the answer and the confidence is pinned to 1.0.

use crate::generator::{Generation, Generator, GeneratorConfig, LlmError, LlmResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude API request.
#[derive(Debug, Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ClaudeMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

/// Claude API response.
#[derive(Debug, Deserialize)]
struct ClaudeResponse {
    content: Vec<ClaudeContent>,
}

#[derive(Debug, Deserialize)]
struct ClaudeContent {
    text: String,
}

/// Claude-backed generator returning uninterpreted text.
///
/// Known limitation: this adapter does not ask the API for a structured
/// confidence, so every generation carries confidence 1.0. With it wired
/// in, candidate ranking degenerates to retrieval order — all candidates
/// tie.
///
/// # Example
///
/// ```rust,ignore
/// use paperqa_llm::{ClaudeGenerator, Generator};
///
/// let generator = ClaudeGenerator::from_env()?;
/// let generation = generator.generate(&prompt).await?;
/// assert_eq!(generation.confidence, 1.0);
/// ```
pub struct ClaudeGenerator {
    api_key: String,
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl ClaudeGenerator {
    /// Create a new Claude generator.
    pub fn new(api_key: &str) -> Self {
        Self::with_config(api_key, GeneratorConfig::claude())
    }

    /// Create with custom config.
    pub fn with_config(api_key: &str, config: GeneratorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.to_string(),
            config,
            client,
        }
    }

    /// Create from the `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env() -> LlmResult<Self> {
        let api_key =
            std::env::var("ANTHROPIC_API_KEY").map_err(|_| LlmError::AuthenticationFailed)?;
        Ok(Self::new(&api_key))
    }

    /// Set the model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.config.model = model.to_string();
        self
    }

    /// Make a request to the Claude API.
    async fn request(&self, prompt: &str) -> LlmResult<String> {
        let request = ClaudeRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LlmError::ConnectionFailed("Cannot connect to Anthropic API".to_string())
                } else if e.is_timeout() {
                    LlmError::Timeout(self.config.timeout_secs)
                } else {
                    LlmError::ApiError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 401 {
                return Err(LlmError::AuthenticationFailed);
            }

            return Err(LlmError::ApiError(format!(
                "Claude API error {}: {}",
                status, body
            )));
        }

        let resp: ClaudeResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        resp.content
            .first()
            .map(|c| c.text.clone())
            .ok_or_else(|| LlmError::InvalidResponse("No content in response".to_string()))
    }
}

#[async_trait]
impl Generator for ClaudeGenerator {
    fn name(&self) -> &str {
        "claude"
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    async fn generate(&self, prompt: &str) -> LlmResult<Generation> {
        let text = self.request(prompt).await?;

        // Free text carries no score; the fixed 1.0 makes every candidate
        // tie at the ranking step.
        Ok(Generation {
            answer: text,
            confidence: 1.0,
        })
    }
}
