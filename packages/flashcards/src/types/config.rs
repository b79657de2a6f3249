//! Configuration types for the flashcard pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pipeline::chunker::DEFAULT_MAX_CHUNK_WORDS;
use crate::pipeline::rank::DEFAULT_MAX_FLASHCARDS;

/// Which extraction algorithm turns chunks into candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Cloze deletion over proper-noun-like spans.
    #[default]
    Pattern,

    /// Questions from entity, noun-phrase and verb tags.
    Entity,

    /// Prompt a generative model for Q/A pairs.
    Generative,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Entity => "entity",
            Self::Generative => "generative",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pattern" => Ok(Self::Pattern),
            "entity" => Ok(Self::Entity),
            "generative" => Ok(Self::Generative),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// Configuration for one pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardConfig {
    /// Word budget per chunk.
    ///
    /// A single sentence longer than this still becomes its own chunk.
    /// Default: 500.
    pub max_chunk_words: usize,

    /// Shortest answer span (in words) a strategy may emit. Default: 1.
    pub min_answer_words: usize,

    /// Longest answer span (in words) a strategy may emit. Default: 5.
    pub max_answer_words: usize,

    /// Upper bound on returned cards. Default: 100.
    pub max_flashcards: usize,

    /// Extraction strategy. Default: pattern.
    pub strategy: StrategyKind,

    /// How many chunks may be extracted at once.
    ///
    /// Results are always merged in chunk order. Default: 4.
    pub concurrency: usize,

    /// Model call settings, used by the generative strategy only.
    pub generation: GenerationSettings,
}

impl Default for FlashcardConfig {
    fn default() -> Self {
        Self {
            max_chunk_words: DEFAULT_MAX_CHUNK_WORDS,
            min_answer_words: 1,
            max_answer_words: 5,
            max_flashcards: DEFAULT_MAX_FLASHCARDS,
            strategy: StrategyKind::Pattern,
            concurrency: 4,
            generation: GenerationSettings::default(),
        }
    }
}

impl FlashcardConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk word budget.
    pub fn with_max_chunk_words(mut self, words: usize) -> Self {
        self.max_chunk_words = words;
        self
    }

    /// Set the answer word bounds (inclusive).
    pub fn with_answer_words(mut self, min: usize, max: usize) -> Self {
        self.min_answer_words = min;
        self.max_answer_words = max;
        self
    }

    /// Set the maximum number of cards.
    pub fn with_max_flashcards(mut self, max: usize) -> Self {
        self.max_flashcards = max;
        self
    }

    /// Set the extraction strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set chunk extraction concurrency.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the generative model call settings.
    pub fn with_generation(mut self, generation: GenerationSettings) -> Self {
        self.generation = generation;
        self
    }

    /// Whether `words` falls inside the answer bounds.
    pub fn answer_len_ok(&self, words: usize) -> bool {
        (self.min_answer_words..=self.max_answer_words).contains(&words)
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chunk_words == 0 {
            return Err(ConfigError::ZeroChunkBudget);
        }
        if self.min_answer_words == 0 {
            return Err(ConfigError::ZeroMinAnswerWords);
        }
        if self.min_answer_words > self.max_answer_words {
            return Err(ConfigError::InvertedAnswerBounds {
                min: self.min_answer_words,
                max: self.max_answer_words,
            });
        }
        if self.max_flashcards == 0 {
            return Err(ConfigError::ZeroMaxFlashcards);
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.generation.max_items_per_chunk == 0 {
            return Err(ConfigError::ZeroItemsPerChunk);
        }
        Ok(())
    }
}

/// Settings for the generative strategy's model calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Sampling temperature. Default: 0.7.
    pub temperature: f32,

    /// Completion length limit. Default: 500.
    pub max_tokens: u32,

    /// Cards kept per chunk. Default: 5.
    pub max_items_per_chunk: usize,

    /// Answer length the prompt asks for. Default: 15.
    pub max_answer_words: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
            max_items_per_chunk: 5,
            max_answer_words: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FlashcardConfig::default();
        assert_eq!(config.max_chunk_words, 500);
        assert_eq!(config.max_flashcards, 100);
        assert_eq!(config.generation, GenerationSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_follow_pipeline_constants() {
        let config = FlashcardConfig::default();
        assert_eq!(config.max_chunk_words, DEFAULT_MAX_CHUNK_WORDS);
        assert_eq!(config.max_flashcards, DEFAULT_MAX_FLASHCARDS);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = FlashcardConfig::new().with_answer_words(4, 2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedAnswerBounds { min: 4, max: 2 })
        );
    }

    #[test]
    fn test_zero_values_rejected() {
        assert_eq!(
            FlashcardConfig::new().with_max_chunk_words(0).validate(),
            Err(ConfigError::ZeroChunkBudget)
        );
        assert_eq!(
            FlashcardConfig::new().with_max_flashcards(0).validate(),
            Err(ConfigError::ZeroMaxFlashcards)
        );
        assert_eq!(
            FlashcardConfig::new().with_concurrency(0).validate(),
            Err(ConfigError::ZeroConcurrency)
        );
        assert_eq!(
            FlashcardConfig::new().with_answer_words(0, 3).validate(),
            Err(ConfigError::ZeroMinAnswerWords)
        );
        assert_eq!(
            FlashcardConfig::new()
                .with_generation(GenerationSettings {
                    max_items_per_chunk: 0,
                    ..Default::default()
                })
                .validate(),
            Err(ConfigError::ZeroItemsPerChunk)
        );
    }

    #[test]
    fn test_answer_len_ok_is_inclusive() {
        let config = FlashcardConfig::new().with_answer_words(1, 2);
        assert!(config.answer_len_ok(1));
        assert!(config.answer_len_ok(2));
        assert!(!config.answer_len_ok(3));
        assert!(!config.answer_len_ok(0));
    }

    #[test]
    fn test_strategy_parses_case_insensitively() {
        assert_eq!("Entity".parse::<StrategyKind>(), Ok(StrategyKind::Entity));
        assert!("summary".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: FlashcardConfig =
            serde_json::from_str(r#"{"strategy": "generative", "max_flashcards": 10}"#).unwrap();
        assert_eq!(config.strategy, StrategyKind::Generative);
        assert_eq!(config.max_flashcards, 10);
        assert_eq!(config.max_chunk_words, 500);
    }

    #[test]
    fn test_generation_settings_deserialize_partially() {
        let config: FlashcardConfig =
            serde_json::from_str(r#"{"generation": {"temperature": 0.2}}"#).unwrap();
        assert_eq!(config.generation.temperature, 0.2);
        assert_eq!(config.generation.max_tokens, 500);
        assert_eq!(config.generation.max_items_per_chunk, 5);
    }
}
