//! Question/answer card types.

use serde::{Deserialize, Serialize};

/// An unvalidated question/answer pair produced by a strategy.
///
/// Both fields are non-empty and trimmed; [`Candidate::new`] refuses
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    question: String,
    answer: String,
}

impl Candidate {
    /// Create a candidate, returning `None` if either side is blank.
    pub fn new(question: impl AsRef<str>, answer: impl AsRef<str>) -> Option<Self> {
        let question = question.as_ref().trim();
        let answer = answer.as_ref().trim();

        if question.is_empty() || answer.is_empty() {
            return None;
        }

        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Key used for duplicate detection.
    pub fn key(&self) -> NormalizedKey {
        NormalizedKey::new(&self.question)
    }
}

/// Case-folded, trimmed question text.
///
/// Equality on the string itself keeps deduplication reproducible across
/// processes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub fn new(question: &str) -> Self {
        Self(question.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A card that survived deduplication and ranking.
///
/// Serializes as `{"question": ..., "answer": ...}` in that key order;
/// downstream exports rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl From<Candidate> for Flashcard {
    fn from(candidate: Candidate) -> Self {
        Self {
            question: candidate.question,
            answer: candidate.answer,
        }
    }
}

/// Pretty-printed JSON array of cards.
pub fn to_json(cards: &[Flashcard]) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}
