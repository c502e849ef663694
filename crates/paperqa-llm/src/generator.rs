//! Core generation trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation-related errors.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Parsing failed: {0}")]
    ParseError(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Timeout after {0} seconds")]
    Timeout(u32),
}

/// Result type for generation operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// One generated answer with its self-reported confidence.
///
/// The confidence is whatever the backing adapter says it is; it is never
/// independently verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// The answer text.
    pub answer: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
}

impl Generation {
    pub fn new(answer: impl Into<String>, confidence: f64) -> Self {
        Self {
            answer: answer.into(),
            confidence,
        }
    }
}

/// Configuration for generation requests.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model name/identifier.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature (0.0 = deterministic).
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "default".to_string(),
            max_tokens: 1024,
            temperature: 0.0,
            timeout_secs: 30,
        }
    }
}

impl GeneratorConfig {
    /// Create config for Ollama.
    pub fn ollama() -> Self {
        Self {
            model: "mistral".to_string(),
            max_tokens: 1024,
            temperature: 0.0,
            timeout_secs: 60, // Local models can be slower
        }
    }

    /// Create config for Claude.
    pub fn claude() -> Self {
        Self {
            model: "claude-3-haiku-20240307".to_string(),
            max_tokens: 1024,
            temperature: 0.0,
            timeout_secs: 30,
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set timeout.
    pub fn with_timeout(mut self, timeout_secs: u32) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Core trait for answer generation.
///
/// The QA engine depends on this trait only. Adapters differ in how they
/// obtain the confidence: a structured adapter parses it out of the model's
/// output, a raw-text adapter assigns a fixed one. Callers must not assume
/// which kind they hold.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Get the generator name.
    fn name(&self) -> &str;

    /// Get the current configuration.
    fn config(&self) -> &GeneratorConfig;

    /// Generate an answer for a single formatted prompt.
    async fn generate(&self, prompt: &str) -> LlmResult<Generation>;

    /// Check if the backend is available.
    async fn health_check(&self) -> LlmResult<bool> {
        match self.generate("ping").await {
            Ok(_) => Ok(true),
            Err(LlmError::ConnectionFailed(_)) => Ok(false),
            Err(LlmError::AuthenticationFailed) => Ok(false),
            Err(_) => Ok(true),
        }
    }
}

/// A mock generator for testing.
pub struct MockGenerator {
    config: GeneratorConfig,
    responses: Vec<(String, Generation)>,
    fail_on: Option<String>,
}

impl MockGenerator {
    /// Create a new mock generator.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            responses: Vec::new(),
            fail_on: None,
        }
    }

    /// Add a canned generation for a prompt pattern.
    pub fn with_generation(mut self, pattern: &str, answer: &str, confidence: f64) -> Self {
        self.responses
            .push((pattern.to_string(), Generation::new(answer, confidence)));
        self
    }

    /// Fail with an API error when the prompt contains the pattern.
    pub fn with_failure(mut self, pattern: &str) -> Self {
        self.fail_on = Some(pattern.to_string());
        self
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    async fn generate(&self, prompt: &str) -> LlmResult<Generation> {
        if let Some(pattern) = &self.fail_on {
            if prompt.contains(pattern.as_str()) {
                return Err(LlmError::ApiError(format!(
                    "mock failure triggered by '{}'",
                    pattern
                )));
            }
        }

        for (pattern, generation) in &self.responses {
            if prompt.contains(pattern.as_str()) {
                return Ok(generation.clone());
            }
        }

        Ok(Generation::new("Mock answer", 0.5))
    }
}
