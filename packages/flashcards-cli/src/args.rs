//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use flashcards::ai::DEFAULT_MODEL;
use flashcards::{FlashcardConfig, GenerationSettings, StrategyKind};

/// Turn prose into question/answer study cards.
///
/// Reads text from a file or stdin and writes a JSON array of
/// `{"question", "answer"}` records to a file or stdout.
#[derive(Debug, Parser)]
#[command(name = "flashcards", version, about)]
pub struct Args {
    /// Text file to read (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// JSON file to write (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extraction strategy: pattern, entity or generative
    #[arg(short, long, default_value_t = StrategyKind::Pattern)]
    pub strategy: StrategyKind,

    /// Word budget per chunk
    #[arg(long, default_value_t = 500)]
    pub max_chunk_words: usize,

    /// Shortest answer span in words
    #[arg(long, default_value_t = 1)]
    pub min_answer_words: usize,

    /// Longest answer span in words
    #[arg(long, default_value_t = 5)]
    pub max_answer_words: usize,

    /// Upper bound on returned cards
    #[arg(short = 'n', long, default_value_t = 100)]
    pub max_flashcards: usize,

    /// Chunks extracted at once
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// Chat model for the generative strategy
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature for the generative strategy
    #[arg(long, default_value_t = 0.7)]
    pub temperature: f32,

    /// Completion length limit for the generative strategy
    #[arg(long, default_value_t = 500)]
    pub max_tokens: u32,

    /// API root for the generative strategy
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,

    /// API key for the generative strategy
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Give up on the whole run after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    /// Pipeline configuration from the flags. Not validated here.
    pub fn flashcard_config(&self) -> FlashcardConfig {
        FlashcardConfig::new()
            .with_strategy(self.strategy)
            .with_max_chunk_words(self.max_chunk_words)
            .with_answer_words(self.min_answer_words, self.max_answer_words)
            .with_max_flashcards(self.max_flashcards)
            .with_concurrency(self.concurrency)
            .with_generation(GenerationSettings {
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                ..Default::default()
            })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library_defaults() {
        let args = Args::try_parse_from(["flashcards"]).unwrap();
        assert_eq!(args.flashcard_config(), FlashcardConfig::default());
        assert!(args.input.is_none());
        assert!(args.timeout().is_none());
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::try_parse_from([
            "flashcards",
            "--strategy",
            "generative",
            "--max-chunk-words",
            "50",
            "--min-answer-words",
            "2",
            "--max-answer-words",
            "3",
            "-n",
            "7",
            "--concurrency",
            "2",
            "--temperature",
            "0.3",
            "--max-tokens",
            "200",
            "--timeout-secs",
            "30",
        ])
        .unwrap();

        let config = args.flashcard_config();
        assert_eq!(config.strategy, StrategyKind::Generative);
        assert_eq!(config.max_chunk_words, 50);
        assert_eq!((config.min_answer_words, config.max_answer_words), (2, 3));
        assert_eq!(config.max_flashcards, 7);
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.generation.temperature, 0.3);
        assert_eq!(config.generation.max_tokens, 200);
        assert_eq!(config.generation.max_items_per_chunk, 5);
        assert_eq!(args.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(Args::try_parse_from(["flashcards", "--strategy", "summary"]).is_err());
    }

    #[test]
    fn test_inverted_bounds_fail_validation() {
        let args = Args::try_parse_from([
            "flashcards",
            "--min-answer-words",
            "4",
            "--max-answer-words",
            "2",
        ])
        .unwrap();
        assert!(args.flashcard_config().validate().is_err());
    }
}
