//! Generative model implementations for the flashcard library.
//!
//! This module provides reference implementations of the `GenerativeModel`
//! trait. Users can use these directly or implement their own.

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "openai")]
pub use openai::{OpenAI, DEFAULT_BASE_URL, DEFAULT_MODEL};
