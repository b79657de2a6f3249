//! Prompt a generative model for Q/A pairs.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ChunkResult, ModelError};
use crate::pipeline::prompts::format_generative_prompt;
use crate::pipeline::response::parse_flashcard_response;
use crate::traits::model::{CompletionOptions, GenerativeModel};
use crate::traits::strategy::ExtractionStrategy;
use crate::types::card::Candidate;
use crate::types::chunk::TextChunk;
use crate::types::config::GenerationSettings;

/// One model call per chunk, parsed with the `Q:` / `A:` reader.
pub struct GenerativeStrategy {
    model: Arc<dyn GenerativeModel>,
    settings: GenerationSettings,
}

impl GenerativeStrategy {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            settings: GenerationSettings::default(),
        }
    }

    /// Override the default generation settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    fn options(&self) -> CompletionOptions {
        CompletionOptions {
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }
}

#[async_trait]
impl ExtractionStrategy for GenerativeStrategy {
    fn name(&self) -> &'static str {
        "generative"
    }

    async fn extract(&self, chunk: &TextChunk) -> ChunkResult<Vec<Candidate>> {
        let prompt = format_generative_prompt(
            chunk.text(),
            self.settings.max_items_per_chunk,
            self.settings.max_answer_words,
        );

        let response = self.model.complete(&prompt, self.options()).await?;
        if response.trim().is_empty() {
            return Err(ModelError::EmptyResponse.into());
        }

        let candidates = parse_flashcard_response(&response, self.settings.max_items_per_chunk);
        debug!(
            response_len = response.len(),
            candidates = candidates.len(),
            "Model response parsed"
        );
        Ok(candidates)
    }
}
