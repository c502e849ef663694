//! # Paperqa LLM
//!
//! Answer-generation backends for paperqa. The QA engine consumes generation
//! through the [`Generator`] trait: one formatted prompt in, one
//! `(answer, confidence)` pair out. How the pair is produced is the
//! adapter's business — [`OllamaGenerator`] asks the model for JSON and
//! validates it against a fixed schema, while [`ClaudeGenerator`] takes the
//! completion verbatim and pins the confidence.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paperqa_llm::{Generator, OllamaGenerator};
//!
//! let generator = OllamaGenerator::localhost();
//! let generation = generator.generate("...prompt...").await?;
//! println!("{} ({:.2})", generation.answer, generation.confidence);
//! ```

mod claude;
mod generator;
mod ollama;
mod prompt;

pub use claude::ClaudeGenerator;
pub use generator::{Generation, Generator, GeneratorConfig, LlmError, LlmResult, MockGenerator};
pub use ollama::OllamaGenerator;
pub use prompt::{AnswerPrompt, PromptTemplate};
