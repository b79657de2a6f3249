//! Text analyzer implementations.
//!
//! - [`RuleAnalyzer`] - punctuation segmentation with heuristic tagging
//! - [`split_sentences`] - the punctuation fallback on its own

pub mod lexicon;
pub mod rules;
pub mod segment;

pub use lexicon::is_stop_word;
pub use rules::RuleAnalyzer;
pub use segment::split_sentences;
