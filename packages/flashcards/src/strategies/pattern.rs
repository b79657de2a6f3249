//! Cloze deletion over proper-noun-like spans.
//!
//! For every sentence, the first capitalized word (or pair of adjacent
//! capitalized words) that is not a stop word becomes the answer, and the
//! sentence with that span blanked out becomes the question:
//!
//! ```text
//! Marie Curie discovered radium.  ->  Q: _____ _____ discovered radium.
//!                                     A: Marie Curie
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::analyzers::{is_stop_word, split_sentences};
use crate::error::ChunkResult;
use crate::traits::strategy::ExtractionStrategy;
use crate::types::card::Candidate;
use crate::types::chunk::{word_count, TextChunk};
use crate::types::config::FlashcardConfig;

static CAPITALIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+\b").unwrap());

/// One blank per hidden word.
pub const BLANK: &str = "_____";

/// Questions this short carry too little context to be answerable.
const MIN_QUESTION_WORDS: usize = 4;

/// Pattern-based cloze strategy.
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    min_answer_words: usize,
    max_answer_words: usize,
}

impl PatternStrategy {
    pub fn new(config: &FlashcardConfig) -> Self {
        Self {
            min_answer_words: config.min_answer_words,
            max_answer_words: config.max_answer_words,
        }
    }

    /// Cloze candidates for a block of text, one per sentence at most.
    pub fn cloze_candidates(&self, text: &str) -> Vec<Candidate> {
        let mut seen = HashSet::new();

        split_sentences(text)
            .iter()
            .filter_map(|sentence| self.cloze(&sentence.text))
            .filter(|candidate| seen.insert(candidate.key()))
            .collect()
    }

    fn cloze(&self, sentence: &str) -> Option<Candidate> {
        let (start, end) = find_span(sentence)?;
        let span = &sentence[start..end];
        let span_words = word_count(span);

        if !(self.min_answer_words..=self.max_answer_words).contains(&span_words) {
            return None;
        }

        let blanks = vec![BLANK; span_words].join(" ");
        let question = format!("{}{}{}", &sentence[..start], blanks, &sentence[end..]);

        if word_count(&question) < MIN_QUESTION_WORDS {
            return None;
        }

        Candidate::new(question, span)
    }
}

/// Byte range of the first capitalized span, extended by one adjacent
/// capitalized word.
fn find_span(sentence: &str) -> Option<(usize, usize)> {
    let mut words = CAPITALIZED
        .find_iter(sentence)
        .filter(|m| !is_stop_word(m.as_str()));

    let first = words.next()?;
    let end = match words.next() {
        Some(next) if is_whitespace_gap(&sentence[first.end()..next.start()]) => next.end(),
        _ => first.end(),
    };

    Some((first.start(), end))
}

fn is_whitespace_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.chars().all(char::is_whitespace)
}

#[async_trait]
impl ExtractionStrategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    async fn extract(&self, chunk: &TextChunk) -> ChunkResult<Vec<Candidate>> {
        Ok(self.cloze_candidates(chunk.text()))
    }
}
