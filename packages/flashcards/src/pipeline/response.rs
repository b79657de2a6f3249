//! Parser for `Q:` / `A:` model responses.
//!
//! Lines are read one at a time after trimming. A `Q:` line opens a pending
//! question, an `A:` line closes it into a pair. A second `Q:` before any
//! `A:` replaces the stale question. A question still pending at the end of
//! the response is dropped. Everything else is ignored.

use crate::types::card::Candidate;

const QUESTION_MARKER: &str = "Q:";
const ANSWER_MARKER: &str = "A:";

enum ParseState {
    NoQuestion,
    HaveQuestion(String),
}

/// Parse a model response into at most `max_items` candidates.
pub fn parse_flashcard_response(response: &str, max_items: usize) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut state = ParseState::NoQuestion;

    for line in response.lines().map(str::trim) {
        if candidates.len() >= max_items {
            break;
        }

        if let Some(question) = line.strip_prefix(QUESTION_MARKER) {
            state = ParseState::HaveQuestion(question.trim().to_string());
            continue;
        }

        let Some(answer) = line.strip_prefix(ANSWER_MARKER) else {
            continue;
        };

        if let ParseState::HaveQuestion(question) =
            std::mem::replace(&mut state, ParseState::NoQuestion)
        {
            // Blank halves are rejected by the constructor.
            if let Some(candidate) = Candidate::new(question, answer) {
                candidates.push(candidate);
            }
        }
    }

    candidates
}
