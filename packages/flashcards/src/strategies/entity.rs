//! Questions from linguistic tags.
//!
//! Three rules run over one [`Tagging`], and their output is concatenated
//! in this order:
//! 1. Recognized entity spans within the answer bounds
//! 2. Multi-word noun phrases headed by a common noun, free of stop words
//! 3. Content verbs other than be/have/do
//!
//! Repeats across rules are left to the pipeline's deduplicator.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ChunkResult;
use crate::traits::analyzer::{EntityCategory, PartOfSpeech, Tagging, TextAnalyzer};
use crate::traits::strategy::ExtractionStrategy;
use crate::types::card::Candidate;
use crate::types::chunk::{word_count, TextChunk};
use crate::types::config::FlashcardConfig;

/// Characters of the source sentence quoted in entity answers.
const CONTEXT_PREFIX_CHARS: usize = 50;

const LIGHT_VERBS: &[&str] = &["be", "have", "do"];

/// Entity, noun-phrase and verb questions driven by a [`TextAnalyzer`].
pub struct EntityStrategy {
    analyzer: Arc<dyn TextAnalyzer>,
    min_answer_words: usize,
    max_answer_words: usize,
}

impl EntityStrategy {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, config: &FlashcardConfig) -> Self {
        Self {
            analyzer,
            min_answer_words: config.min_answer_words,
            max_answer_words: config.max_answer_words,
        }
    }

    /// Apply all three rules to an existing tagging.
    pub fn candidates_from(&self, tagging: &Tagging) -> Vec<Candidate> {
        let mut candidates = self.entity_questions(tagging);
        candidates.extend(noun_phrase_questions(tagging));
        candidates.extend(verb_questions(tagging));
        candidates
    }

    fn entity_questions(&self, tagging: &Tagging) -> Vec<Candidate> {
        tagging
            .entities
            .iter()
            .filter(|e| e.category.is_recognized())
            .filter(|e| {
                (self.min_answer_words..=self.max_answer_words).contains(&word_count(&e.text))
            })
            .filter_map(|e| {
                let asker = match e.category {
                    EntityCategory::Person => "Who",
                    _ => "What",
                };
                let question = format!("{asker} is '{}' in this context?", e.text);
                let answer = format!(
                    "{}: {} (from: {})",
                    e.category.label(),
                    e.text,
                    context_prefix(tagging.sentence_text(e.sentence))
                );
                Candidate::new(question, answer)
            })
            .collect()
    }
}

fn noun_phrase_questions(tagging: &Tagging) -> Vec<Candidate> {
    tagging
        .noun_phrases
        .iter()
        .filter(|np| np.head_pos == PartOfSpeech::Noun && !np.contains_stop_word)
        .filter(|np| word_count(&np.text) > 1)
        .filter_map(|np| {
            let question = format!(
                "Explain the concept of '{}' and how it relates to '{}'.",
                np.text, np.head_lemma
            );
            let answer = format!("Context: {}", tagging.sentence_text(np.sentence));
            Candidate::new(question, answer)
        })
        .collect()
}

fn verb_questions(tagging: &Tagging) -> Vec<Candidate> {
    tagging
        .tokens
        .iter()
        .filter(|t| t.pos == PartOfSpeech::Verb && !t.is_stop)
        .filter(|t| !LIGHT_VERBS.contains(&t.lemma.as_str()))
        .filter_map(|t| {
            let question = format!("What does it mean to '{}' in this context?", t.lemma);
            Candidate::new(question, tagging.sentence_text(t.sentence))
        })
        .collect()
}

fn context_prefix(sentence: &str) -> String {
    let mut chars = sentence.chars();
    let prefix: String = chars.by_ref().take(CONTEXT_PREFIX_CHARS).collect();
    if chars.next().is_some() {
        format!("{prefix}...")
    } else {
        prefix
    }
}

#[async_trait]
impl ExtractionStrategy for EntityStrategy {
    fn name(&self) -> &'static str {
        "entity"
    }

    async fn extract(&self, chunk: &TextChunk) -> ChunkResult<Vec<Candidate>> {
        let tagging = self.analyzer.tag(chunk.text())?;
        debug!(
            entities = tagging.entities.len(),
            noun_phrases = tagging.noun_phrases.len(),
            tokens = tagging.tokens.len(),
            "Chunk tagged"
        );
        Ok(self.candidates_from(&tagging))
    }
}
