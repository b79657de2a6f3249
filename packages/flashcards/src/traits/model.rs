//! GenerativeModel trait for free-form text completion.
//!
//! The generative strategy builds a prompt and hands it to a model; the
//! model returns raw text which the strategy parses. Implementations wrap
//! specific providers (OpenAI, local models, etc.).

use async_trait::async_trait;

use crate::error::ModelError;

/// Sampling options for a single completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// Prompt in, text out.
///
/// No timeout is implied; callers wrap calls in their own cancellation.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Complete the prompt.
    async fn complete(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<String, ModelError>;
}

#[async_trait]
impl<T: GenerativeModel + ?Sized> GenerativeModel for std::sync::Arc<T> {
    async fn complete(
        &self,
        prompt: &str,
        options: CompletionOptions,
    ) -> Result<String, ModelError> {
        (**self).complete(prompt, options).await
    }
}
