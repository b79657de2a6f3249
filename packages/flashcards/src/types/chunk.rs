//! Sentence and chunk types produced by segmentation.

use serde::{Deserialize, Serialize};

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// One sentence span reported by a text analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, trimmed
    pub text: String,

    /// Whitespace word count of `text`
    pub word_count: usize,
}

impl Sentence {
    /// Create a sentence, trimming the text and counting its words.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into().trim().to_string();
        let word_count = word_count(&text);
        Self { text, word_count }
    }
}

/// A bounded, sentence-aligned slice of the input text.
///
/// Invariant: `word_count` never exceeds the chunk budget it was built
/// with, unless the chunk holds exactly one sentence that alone exceeds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    sentences: Vec<Sentence>,
    text: String,
    word_count: usize,
}

impl TextChunk {
    /// Build a chunk from consecutive sentences.
    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        let text = sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let word_count = sentences.iter().map(|s| s.word_count).sum();

        Self {
            sentences,
            text,
            word_count,
        }
    }

    /// Constituent sentences, in order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Sentences joined by a single space.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sum of the constituent sentence word counts.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_trims_and_counts() {
        let s = Sentence::new("  Water boils at sea level.  ");
        assert_eq!(s.text, "Water boils at sea level.");
        assert_eq!(s.word_count, 5);
    }

    #[test]
    fn test_chunk_joins_sentences() {
        let chunk = TextChunk::from_sentences(vec![
            Sentence::new("One two."),
            Sentence::new("Three four five."),
        ]);
        assert_eq!(chunk.text(), "One two. Three four five.");
        assert_eq!(chunk.word_count(), 5);
        assert_eq!(chunk.sentences().len(), 2);
    }
}
