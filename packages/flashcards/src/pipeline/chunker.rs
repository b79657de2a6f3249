//! Chunker - split text into sentence-aligned, word-bounded chunks.
//!
//! Sentences are packed greedily in arrival order: a sentence joins the
//! current chunk while the running word count stays within budget, otherwise
//! it opens the next chunk. A sentence longer than the budget gets a chunk of
//! its own. Nothing is ever split mid-sentence or dropped.

use tracing::{debug, warn};

use crate::analyzers::split_sentences;
use crate::traits::analyzer::TextAnalyzer;
use crate::types::chunk::{Sentence, TextChunk};

/// Default word budget per chunk.
pub const DEFAULT_MAX_CHUNK_WORDS: usize = 500;

/// Segment `text` with the analyzer and pack the sentences into chunks.
///
/// Falls back to punctuation segmentation if the analyzer fails.
/// Empty or whitespace-only text yields no chunks.
pub fn chunk_text(
    analyzer: &dyn TextAnalyzer,
    text: &str,
    max_chunk_words: usize,
) -> Vec<TextChunk> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let sentences = match analyzer.segment(text) {
        Ok(sentences) => sentences,
        Err(e) => {
            warn!(error = %e, "Segmentation failed, falling back to punctuation split");
            split_sentences(text)
        }
    };

    let chunks = pack_sentences(sentences, max_chunk_words);
    debug!(chunks = chunks.len(), max_chunk_words, "Text chunked");
    chunks
}

/// Greedily pack sentences into chunks of at most `max_chunk_words` words.
pub fn pack_sentences(sentences: Vec<Sentence>, max_chunk_words: usize) -> Vec<TextChunk> {
    let mut chunks = Vec::new();
    let mut current: Vec<Sentence> = Vec::new();
    let mut running = 0;

    for sentence in sentences.into_iter().filter(|s| !s.text.is_empty()) {
        if !current.is_empty() && running + sentence.word_count > max_chunk_words {
            chunks.push(TextChunk::from_sentences(std::mem::take(&mut current)));
            running = 0;
        }
        running += sentence.word_count;
        current.push(sentence);
    }

    if !current.is_empty() {
        chunks.push(TextChunk::from_sentences(current));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::RuleAnalyzer;
    use crate::testing::MockAnalyzer;
    use proptest::prelude::*;

    fn sentence(words: usize) -> Sentence {
        let body = vec!["word"; words].join(" ");
        Sentence::new(format!("{body}."))
    }

    #[test]
    fn test_empty_text_gives_no_chunks() {
        assert!(chunk_text(&RuleAnalyzer, "", 10).is_empty());
        assert!(chunk_text(&RuleAnalyzer, "   \n\t", 10).is_empty());
    }

    #[test]
    fn test_short_text_gives_one_chunk() {
        let chunks = chunk_text(&RuleAnalyzer, "One fact. Another fact.", 500);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text(), "One fact. Another fact.");
        assert_eq!(chunks[0].word_count(), 4);
    }

    #[test]
    fn test_budget_closes_chunk() {
        let chunks = pack_sentences(vec![sentence(3), sentence(3), sentence(3)], 6);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].word_count(), 6);
        assert_eq!(chunks[1].word_count(), 3);
    }

    #[test]
    fn test_oversized_sentence_gets_own_chunk() {
        let chunks = pack_sentences(vec![sentence(2), sentence(10), sentence(2)], 5);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].sentences().len(), 1);
        assert_eq!(chunks[1].word_count(), 10);
    }

    #[test]
    fn test_analyzer_failure_falls_back_to_punctuation() {
        let analyzer = MockAnalyzer::new().failing();
        let chunks = chunk_text(&analyzer, "First one. Second one.", 2);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text(), "First one.");
    }

    proptest! {
        #[test]
        fn prop_chunks_preserve_sentences_and_budget(
            lengths in prop::collection::vec(1usize..40, 0..60),
            budget in 1usize..80,
        ) {
            let sentences: Vec<Sentence> = lengths.iter().map(|&n| sentence(n)).collect();
            let chunks = pack_sentences(sentences.clone(), budget);

            let rebuilt: Vec<Sentence> = chunks
                .iter()
                .flat_map(|c| c.sentences().iter().cloned())
                .collect();
            prop_assert_eq!(rebuilt, sentences);

            for chunk in &chunks {
                prop_assert!(
                    chunk.word_count() <= budget || chunk.sentences().len() == 1
                );
            }
        }
    }
}
