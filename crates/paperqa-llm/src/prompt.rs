//! Prompt templates for answer generation.

use paperqa_core::types::Paper;

/// A prompt template for generation requests.
pub trait PromptTemplate {
    /// Generate the prompt text.
    fn generate(&self) -> String;

    /// Get the system prompt (if any).
    fn system_prompt(&self) -> Option<String> {
        None
    }
}

/// The per-candidate QA prompt.
///
/// Embeds one paper's title, content, summary and publication date together
/// with the verbatim question, in the instruction format the generation
/// models are tuned for. The closing instruction asks the model to also
/// emit a confidence score strictly between 0 and 1; whether that score is
/// honored depends on the adapter.
#[derive(Debug, Clone)]
pub struct AnswerPrompt<'a> {
    /// The candidate paper providing context.
    pub paper: &'a Paper,
    /// The user's question, verbatim.
    pub question: &'a str,
}

impl<'a> AnswerPrompt<'a> {
    /// Create a prompt for one (paper, question) pair.
    pub fn new(paper: &'a Paper, question: &'a str) -> Self {
        Self { paper, question }
    }
}

impl PromptTemplate for AnswerPrompt<'_> {
    fn generate(&self) -> String {
        // Not every source carries full text; absence reads as empty.
        let content = self.paper.content.as_deref().unwrap_or_default();

        format!(
            "<s> [INST]\n\
             Title: {}\n\
             Content: {}\n\
             Summary: {}\n\
             Published: {}\n\
             \n\
             {}\n\
             Also provide a confidence score of your produced output. \
             This score should be strictly between 0 and 1.[/INST]",
            self.paper.title, content, self.paper.summary, self.paper.published, self.question
        )
    }
}
