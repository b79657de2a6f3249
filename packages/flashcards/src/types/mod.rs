//! Core data types for the flashcard pipeline.

pub mod card;
pub mod chunk;
pub mod config;
