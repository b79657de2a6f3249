//! Flashcard Extraction Library
//!
//! Turns unstructured prose into a bounded list of question/answer study
//! cards.
//!
//! # Pipeline
//!
//! 1. Split the text into sentence-aligned chunks under a word budget
//! 2. Turn each chunk into candidate cards with one extraction strategy
//! 3. Drop candidates whose normalized question was already seen
//! 4. Order by question length and keep at most `max_flashcards`
//!
//! Strategies are interchangeable: pattern-based cloze deletion, questions
//! from entity/noun-phrase/verb tags, or a generative model prompted for
//! `Q:` / `A:` pairs. The text analyzer and the generative model are
//! injected, never global.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use flashcards::{FlashcardConfig, Pipeline, RuleAnalyzer};
//!
//! let pipeline = Pipeline::new(FlashcardConfig::default(), Arc::new(RuleAnalyzer::new()), None)?;
//! let cards = pipeline.generate("Marie Curie discovered radium.").await?;
//! println!("{}", flashcards::to_json(&cards)?);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator abstractions (TextAnalyzer, GenerativeModel, ExtractionStrategy)
//! - [`types`] - Chunks, cards and configuration
//! - [`pipeline`] - Chunker, deduplicator, ranker and the orchestrating Pipeline
//! - [`strategies`] - Pattern, Entity and Generative strategies
//! - [`analyzers`] - Rule-based text analyzer
//! - [`testing`] - Mock implementations for testing

pub mod analyzers;
pub mod error;
pub mod pipeline;
pub mod strategies;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "openai")]
pub mod ai;

// Re-export core types at crate root
pub use error::{
    AnalyzerError, ChunkResult, CollaboratorError, ConfigError, FlashcardError, InputError,
    ModelError, Result,
};
pub use traits::{
    analyzer::{
        EntityCategory, EntitySpan, NounPhrase, PartOfSpeech, Tagging, TextAnalyzer, Token,
    },
    model::{CompletionOptions, GenerativeModel},
    strategy::ExtractionStrategy,
};
pub use types::{
    card::{to_json, Candidate, Flashcard, NormalizedKey},
    chunk::{Sentence, TextChunk},
    config::{FlashcardConfig, GenerationSettings, StrategyKind},
};

// Re-export pipeline components
pub use pipeline::{
    chunk_text, dedupe, generate_flashcards, parse_flashcard_response, rank, Generation,
    GenerationStats, Pipeline,
};

pub use analyzers::RuleAnalyzer;
pub use strategies::{EntityStrategy, GenerativeStrategy, PatternStrategy};

// Re-export testing utilities
pub use testing::{MockAnalyzer, MockModel};
