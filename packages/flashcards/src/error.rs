//! Typed errors for the flashcard library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Only [`FlashcardError`] ever reaches a caller of the pipeline.
//! [`CollaboratorError`]s are isolated to the chunk that produced them,
//! and [`InputError`] is reported on the run result rather than raised.

use thiserror::Error;

/// Errors that abort a pipeline invocation.
#[derive(Debug, Error)]
pub enum FlashcardError {
    /// Configuration rejected before any processing began
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Operation was cancelled by the caller
    #[error("operation cancelled")]
    Cancelled,

    /// JSON serialization of the card list failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_chunk_words` must be positive
    #[error("max_chunk_words must be greater than zero")]
    ZeroChunkBudget,

    /// `min_answer_words` must be positive
    #[error("min_answer_words must be greater than zero")]
    ZeroMinAnswerWords,

    /// Answer word bounds are inverted
    #[error("min_answer_words ({min}) exceeds max_answer_words ({max})")]
    InvertedAnswerBounds { min: usize, max: usize },

    /// `max_flashcards` must be positive
    #[error("max_flashcards must be greater than zero")]
    ZeroMaxFlashcards,

    /// `concurrency` must be positive
    #[error("concurrency must be greater than zero")]
    ZeroConcurrency,

    /// `generation.max_items_per_chunk` must be positive
    #[error("max_items_per_chunk must be greater than zero")]
    ZeroItemsPerChunk,

    /// The configured strategy needs a collaborator that was not supplied
    #[error("{strategy} strategy requires a {collaborator}")]
    MissingCollaborator {
        strategy: &'static str,
        collaborator: &'static str,
    },

    /// A required environment variable is not set
    #[error("{0} not set")]
    MissingEnvVar(&'static str),
}

/// Input that cannot produce any cards.
///
/// Not a failure: the run completes with an empty card list and carries
/// this value so callers can tell "nothing to read" apart from
/// "nothing could be extracted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Text was empty or whitespace-only
    #[error("input text is empty")]
    EmptyText,
}

/// Failure of an external collaborator while processing one chunk.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// Text analyzer failed
    #[error("text analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// Generative model failed
    #[error("generative model error: {0}")]
    Model(#[from] ModelError),
}

/// Errors raised by a [`TextAnalyzer`](crate::traits::analyzer::TextAnalyzer).
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The analysis engine is not available
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),

    /// The engine returned something that could not be interpreted
    #[error("malformed analysis: {0}")]
    Malformed(String),
}

/// Errors raised by a [`GenerativeModel`](crate::traits::model::GenerativeModel).
#[derive(Debug, Error)]
pub enum ModelError {
    /// Service could not be reached
    #[error("service unreachable: {0}")]
    Unreachable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Service answered with a non-success status
    #[error("service error (status {status}): {body}")]
    Service { status: u16, body: String },

    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Response carried no text
    #[error("empty response")]
    EmptyResponse,
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Result type alias for per-chunk collaborator calls.
pub type ChunkResult<T> = std::result::Result<T, CollaboratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_names_bounds() {
        let err = ConfigError::InvertedAnswerBounds { min: 6, max: 2 };
        assert_eq!(
            err.to_string(),
            "min_answer_words (6) exceeds max_answer_words (2)"
        );
    }

    #[test]
    fn test_collaborator_error_wraps_model_error() {
        let err: CollaboratorError = ModelError::Timeout.into();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_config_error_converts_to_flashcard_error() {
        let err: FlashcardError = ConfigError::ZeroChunkBudget.into();
        assert!(matches!(err, FlashcardError::Config(_)));
    }

    #[test]
    fn test_json_error_converts_to_flashcard_error() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: FlashcardError = json_err.into();
        assert!(matches!(err, FlashcardError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_missing_env_var_names_variable() {
        let err = ConfigError::MissingEnvVar("OPENAI_API_KEY");
        assert_eq!(err.to_string(), "OPENAI_API_KEY not set");
    }
}
