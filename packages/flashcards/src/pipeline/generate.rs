//! The Pipeline - main entry point for flashcard generation.
//!
//! Chunker → Strategy (per chunk, concurrently) → Deduplicator → Ranker.
//!
//! Per-chunk collaborator failures never abort a run: the chunk contributes
//! zero candidates and is counted in [`GenerationStats::failed_chunks`].

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::chunker::chunk_text;
use super::dedupe::dedupe;
use super::prompts::generative_prompt_hash;
use super::rank::rank;
use crate::error::{ConfigError, FlashcardError, InputError, Result};
use crate::strategies::{EntityStrategy, GenerativeStrategy, PatternStrategy};
use crate::traits::{
    analyzer::TextAnalyzer, model::GenerativeModel, strategy::ExtractionStrategy,
};
use crate::types::{
    card::Flashcard,
    config::{FlashcardConfig, StrategyKind},
};

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Chunks the text was split into
    pub chunks: usize,

    /// Candidates produced across all chunks
    pub candidates: usize,

    /// Candidates dropped as duplicates
    pub duplicates_dropped: usize,

    /// Unique candidates cut by the count limit
    pub truncated: usize,

    /// Chunks whose extraction failed
    pub failed_chunks: usize,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub flashcards: Vec<Flashcard>,
    pub stats: GenerationStats,

    /// Set when the input had nothing to read
    pub input_error: Option<InputError>,
}

/// Chunks text, extracts candidates and returns ranked flashcards.
///
/// # Example
///
/// ```rust,ignore
/// let analyzer = Arc::new(RuleAnalyzer::new());
/// let pipeline = Pipeline::new(FlashcardConfig::default(), analyzer, None)?;
///
/// let cards = pipeline.generate("Marie Curie discovered radium.").await?;
/// ```
pub struct Pipeline {
    config: FlashcardConfig,
    analyzer: Arc<dyn TextAnalyzer>,
    strategy: Box<dyn ExtractionStrategy>,
}

impl Pipeline {
    /// Build a pipeline for the configured strategy.
    ///
    /// The generative strategy needs a `model`; the others ignore it.
    pub fn new(
        config: FlashcardConfig,
        analyzer: Arc<dyn TextAnalyzer>,
        model: Option<Arc<dyn GenerativeModel>>,
    ) -> Result<Self> {
        config.validate()?;

        let strategy: Box<dyn ExtractionStrategy> = match config.strategy {
            StrategyKind::Pattern => Box::new(PatternStrategy::new(&config)),
            StrategyKind::Entity => Box::new(EntityStrategy::new(analyzer.clone(), &config)),
            StrategyKind::Generative => {
                let model = model.ok_or(ConfigError::MissingCollaborator {
                    strategy: "generative",
                    collaborator: "generative model",
                })?;
                debug!(prompt_hash = %generative_prompt_hash(), "Using generative prompt");
                Box::new(
                    GenerativeStrategy::new(model).with_settings(config.generation.clone()),
                )
            }
        };

        Ok(Self {
            config,
            analyzer,
            strategy,
        })
    }

    /// Build a pipeline around a caller-supplied strategy.
    ///
    /// `config.strategy` is ignored.
    pub fn with_strategy(
        config: FlashcardConfig,
        analyzer: Arc<dyn TextAnalyzer>,
        strategy: Box<dyn ExtractionStrategy>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            analyzer,
            strategy,
        })
    }

    /// Run the pipeline and report what happened.
    pub async fn run(&self, text: &str) -> Result<Generation> {
        if text.trim().is_empty() {
            debug!("Empty input, nothing to extract");
            return Ok(Generation {
                flashcards: Vec::new(),
                stats: GenerationStats::default(),
                input_error: Some(InputError::EmptyText),
            });
        }

        let chunks = chunk_text(
            self.analyzer.as_ref(),
            text,
            self.config.max_chunk_words,
        );
        let mut stats = GenerationStats {
            chunks: chunks.len(),
            ..Default::default()
        };

        // Ordered gather: buffered yields results in chunk order.
        let results: Vec<_> = stream::iter(chunks.iter().enumerate())
            .map(|(index, chunk)| async move { (index, self.strategy.extract(chunk).await) })
            .buffered(self.config.concurrency)
            .collect()
            .await;

        let mut candidates = Vec::new();
        for (index, result) in results {
            match result {
                Ok(found) => {
                    debug!(chunk = index, candidates = found.len(), "Chunk extracted");
                    candidates.extend(found);
                }
                Err(e) => {
                    warn!(
                        chunk = index,
                        error = %e,
                        strategy = self.strategy.name(),
                        "Chunk extraction failed"
                    );
                    stats.failed_chunks += 1;
                }
            }
        }
        stats.candidates = candidates.len();

        let unique = dedupe(candidates);
        stats.duplicates_dropped = stats.candidates - unique.len();
        stats.truncated = unique.len().saturating_sub(self.config.max_flashcards);

        let flashcards = rank(unique, self.config.max_flashcards);

        info!(
            strategy = self.strategy.name(),
            chunks = stats.chunks,
            candidates = stats.candidates,
            duplicates_dropped = stats.duplicates_dropped,
            failed_chunks = stats.failed_chunks,
            flashcards = flashcards.len(),
            "Flashcard generation complete"
        );

        Ok(Generation {
            flashcards,
            stats,
            input_error: None,
        })
    }

    /// Run the pipeline and return only the cards.
    pub async fn generate(&self, text: &str) -> Result<Vec<Flashcard>> {
        Ok(self.run(text).await?.flashcards)
    }

    /// Run with cancellation support.
    pub async fn generate_with_cancel(
        &self,
        text: &str,
        cancel: CancellationToken,
    ) -> Result<Generation> {
        tokio::select! {
            result = self.run(text) => result,
            _ = cancel.cancelled() => Err(FlashcardError::Cancelled),
        }
    }
}

/// One-shot convenience over [`Pipeline`].
pub async fn generate_flashcards(
    text: &str,
    config: FlashcardConfig,
    analyzer: Arc<dyn TextAnalyzer>,
    model: Option<Arc<dyn GenerativeModel>>,
) -> Result<Vec<Flashcard>> {
    Pipeline::new(config, analyzer, model)?.generate(text).await
}
