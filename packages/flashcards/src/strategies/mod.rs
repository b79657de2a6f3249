//! Extraction strategy implementations.
//!
//! - [`PatternStrategy`] - cloze deletion over capitalized spans
//! - [`EntityStrategy`] - questions from entity, noun-phrase and verb tags
//! - [`GenerativeStrategy`] - Q/A pairs from a generative model

pub mod entity;
pub mod generative;
pub mod pattern;

pub use entity::EntityStrategy;
pub use generative::GenerativeStrategy;
pub use pattern::PatternStrategy;
