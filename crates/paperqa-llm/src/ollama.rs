//! Ollama generator — the schema-validated adapter.
//!
//! Requires a running Ollama instance. The model is instructed to answer
//! with a JSON object; the adapter validates it against the fixed
//! `{answer, score}` schema and coerces the score into [0, 1].

use crate::generator::{Generation, Generator, GeneratorConfig, LlmError, LlmResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const SCHEMA_SYSTEM_PROMPT: &str =
    "You answer questions about research papers. Respond ONLY with a JSON object \
     of the form {\"answer\": \"<answer text>\", \"score\": <number between 0 and 1>}. \
     No explanation outside the JSON.";

/// Ollama API request.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

/// Ollama API response.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

/// The structured output schema the model is held to.
#[derive(Debug, Deserialize)]
struct StructuredOutput {
    answer: String,
    #[serde(alias = "confidence")]
    score: f64,
}

/// Ollama-backed generator with schema-validated output.
///
/// # Example
///
/// ```rust,ignore
/// use paperqa_llm::{Generator, OllamaGenerator};
///
/// let generator = OllamaGenerator::localhost().with_model("mistral");
/// let generation = generator.generate(&prompt).await?;
/// ```
pub struct OllamaGenerator {
    endpoint: String,
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl OllamaGenerator {
    /// Create a new Ollama generator.
    pub fn new(endpoint: &str) -> Self {
        Self::with_config(endpoint, GeneratorConfig::ollama())
    }

    /// Create with custom config.
    pub fn with_config(endpoint: &str, config: GeneratorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            config,
            client,
        }
    }

    /// Create with default localhost endpoint.
    pub fn localhost() -> Self {
        Self::new("http://localhost:11434")
    }

    /// Set the model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.config.model = model.to_string();
        self
    }

    /// Make a request to Ollama.
    async fn request(&self, prompt: &str, system: Option<&str>) -> LlmResult<String> {
        let request = OllamaRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            system: system.map(|s| s.to_string()),
            stream: false,
            options: OllamaOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
        };

        let url = format!("{}/api/generate", self.endpoint);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LlmError::ConnectionFailed(format!(
                        "Cannot connect to Ollama at {}. Is Ollama running?",
                        self.endpoint
                    ))
                } else if e.is_timeout() {
                    LlmError::Timeout(self.config.timeout_secs)
                } else {
                    LlmError::ApiError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 404 {
                return Err(LlmError::ModelNotFound(format!(
                    "Model '{}' not found. Run: ollama pull {}",
                    self.config.model, self.config.model
                )));
            }

            return Err(LlmError::ApiError(format!(
                "Ollama error {}: {}",
                status, body
            )));
        }

        let resp: OllamaResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Ok(resp.response)
    }
}

#[async_trait]
impl Generator for OllamaGenerator {
    fn name(&self) -> &str {
        "ollama"
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    async fn generate(&self, prompt: &str) -> LlmResult<Generation> {
        let response = self.request(prompt, Some(SCHEMA_SYSTEM_PROMPT)).await?;

        parse_structured(&response).map_err(|e| {
            LlmError::ParseError(format!(
                "Failed to parse generation: {}. Response: {}",
                e, response
            ))
        })
    }

    async fn health_check(&self) -> LlmResult<bool> {
        let url = format!("{}/api/tags", self.endpoint);

        match self.client.get(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}

/// Parse a structured `{answer, score}` completion.
///
/// Models wrap JSON in fences or prose often enough that the object is
/// extracted before deserializing. The score is coerced into [0, 1].
pub(crate) fn parse_structured(text: &str) -> Result<Generation, serde_json::Error> {
    let json_str = extract_json_object(text);
    let raw: StructuredOutput = serde_json::from_str(json_str)?;

    Ok(Generation {
        answer: raw.answer,
        confidence: raw.score.clamp(0.0, 1.0),
    })
}

fn extract_json_object(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    let text = text.trim();

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        &text[start..=end]
    } else {
        text
    }
}
