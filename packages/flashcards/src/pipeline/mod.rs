//! Flashcard pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Chunking (sentence-aligned, word-bounded)
//! - Extraction with the configured strategy, one call per chunk
//! - Deduplication by normalized question
//! - Ranking and truncation

pub mod chunker;
pub mod dedupe;
pub mod generate;
pub mod prompts;
pub mod rank;
pub mod response;

pub use chunker::{chunk_text, pack_sentences, DEFAULT_MAX_CHUNK_WORDS};
pub use dedupe::dedupe;
pub use generate::{generate_flashcards, Generation, GenerationStats, Pipeline};
pub use prompts::{format_generative_prompt, generative_prompt_hash, GENERATIVE_PROMPT};
pub use rank::{rank, DEFAULT_MAX_FLASHCARDS};
pub use response::parse_flashcard_response;
