//! Ranker - shortest questions first, capped at a maximum count.
//!
//! Length is a cheap proxy for "easy cards first", not semantic importance.

use crate::types::card::{Candidate, Flashcard};

/// Default cap on returned cards.
pub const DEFAULT_MAX_FLASHCARDS: usize = 100;

/// Sort by question character count (stable) and keep at most `max_count`.
pub fn rank(mut candidates: Vec<Candidate>, max_count: usize) -> Vec<Flashcard> {
    // sort_by_key is stable: equal lengths keep first-seen order.
    candidates.sort_by_key(|c| c.question().chars().count());
    candidates.truncate(max_count);
    candidates.into_iter().map(Flashcard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn candidate(question: &str) -> Candidate {
        Candidate::new(question, "answer").unwrap()
    }

    #[test]
    fn test_shorter_questions_first() {
        let ranked = rank(
            vec![candidate("A longer question?"), candidate("Short?")],
            10,
        );
        assert_eq!(ranked[0].question, "Short?");
        assert_eq!(ranked[1].question, "A longer question?");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(vec![candidate("bbb?"), candidate("aaa?"), candidate("c?")], 10);
        let questions: Vec<_> = ranked.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(questions, vec!["c?", "bbb?", "aaa?"]);
    }

    #[test]
    fn test_truncates_to_max_count() {
        let ranked = rank(
            vec![candidate("one?"), candidate("two?"), candidate("three?")],
            2,
        );
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let ranked = rank(vec![candidate("ééééé?"), candidate("abcdefg?")], 10);
        assert_eq!(ranked[0].question, "ééééé?");
    }

    proptest! {
        #[test]
        fn prop_rank_is_deterministic_and_bounded(
            questions in prop::collection::vec("[a-z]{1,12}", 0..40),
            max in 1usize..20,
        ) {
            let candidates: Vec<Candidate> = questions
                .iter()
                .filter_map(|q| Candidate::new(q, "answer"))
                .collect();

            let first = rank(candidates.clone(), max);
            let second = rank(candidates, max);
            prop_assert!(first.len() <= max);
            prop_assert_eq!(&first, &second);

            for pair in first.windows(2) {
                prop_assert!(pair[0].question.chars().count() <= pair[1].question.chars().count());
            }
        }
    }
}
