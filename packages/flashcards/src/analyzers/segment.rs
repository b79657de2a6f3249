//! Punctuation-boundary sentence segmentation.
//!
//! Splits after `.`, `!` or `?` when followed by whitespace. Used directly by
//! the rule analyzer and as the chunker's fallback when an analyzer fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::chunk::Sentence;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_END.find_iter(text) {
        // Keep the punctuation mark, drop the whitespace.
        push_sentence(&mut sentences, &text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<Sentence>, raw: &str) {
    if !raw.trim().is_empty() {
        sentences.push(Sentence::new(raw));
    }
}
