//! TextAnalyzer trait for sentence segmentation and linguistic tagging.
//!
//! The pipeline only needs two capabilities from an analysis engine:
//! - Sentence boundaries (used by the chunker and the pattern strategy)
//! - Entity, noun-phrase and token tags (used by the entity strategy)
//!
//! Every tagged item carries the index of the sentence it came from, so
//! strategies can quote the containing sentence as context.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;
use crate::types::chunk::Sentence;

/// Sentence segmentation plus optional tagging.
///
/// Implementations may wrap a full NLP engine or a lightweight rule set;
/// the pipeline does not care which.
pub trait TextAnalyzer: Send + Sync {
    /// Split text into ordered sentences.
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, AnalyzerError>;

    /// Tag entities, noun phrases and tokens.
    fn tag(&self, text: &str) -> Result<Tagging, AnalyzerError>;
}

impl<T: TextAnalyzer + ?Sized> TextAnalyzer for std::sync::Arc<T> {
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, AnalyzerError> {
        (**self).segment(text)
    }

    fn tag(&self, text: &str) -> Result<Tagging, AnalyzerError> {
        (**self).tag(text)
    }
}

/// Everything the analyzer found in one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tagging {
    /// Sentences, indexed by the `sentence` field of every item below
    pub sentences: Vec<Sentence>,

    /// Named-entity spans
    pub entities: Vec<EntitySpan>,

    /// Noun-phrase spans with their grammatical head
    pub noun_phrases: Vec<NounPhrase>,

    /// Individually tagged tokens
    pub tokens: Vec<Token>,
}

impl Tagging {
    /// Text of the sentence at `index`, or an empty string.
    pub fn sentence_text(&self, index: usize) -> &str {
        self.sentences
            .get(index)
            .map(|s| s.text.as_str())
            .unwrap_or_default()
    }
}

/// Entity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    Date,
    Event,
    /// Anything the engine tags that the pipeline does not ask about
    Other,
}

impl EntityCategory {
    /// Categories the entity strategy turns into questions.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Organization => "Organization",
            Self::Location => "Location",
            Self::Date => "Date",
            Self::Event => "Event",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Other,
}

/// A tagged entity span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub category: EntityCategory,
    pub sentence: usize,
}

/// A noun phrase and its head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounPhrase {
    pub text: String,

    /// Base form of the head word
    pub head_lemma: String,

    /// Part of speech of the head word
    pub head_pos: PartOfSpeech,

    /// Whether any token in the phrase is a stop word
    pub contains_stop_word: bool,

    pub sentence: usize,
}

/// A single tagged token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
    pub lemma: String,
    pub is_stop: bool,
    pub sentence: usize,
}
