//! Core trait abstractions.

pub mod analyzer;
pub mod model;
pub mod strategy;
