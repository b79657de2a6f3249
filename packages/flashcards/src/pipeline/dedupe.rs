//! Deduplicator - drop repeated questions, keeping the first one seen.

use std::collections::HashSet;

use crate::types::card::{Candidate, NormalizedKey};

/// Remove candidates whose normalized question was already seen.
///
/// Order of the survivors is the input order.
pub fn dedupe(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<NormalizedKey> = HashSet::with_capacity(candidates.len());

    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn candidate(question: &str, answer: &str) -> Candidate {
        Candidate::new(question, answer).unwrap()
    }

    #[test]
    fn test_first_seen_wins() {
        let deduped = dedupe(vec![
            candidate("What is radium?", "An element"),
            candidate("Who won twice?", "Curie"),
            candidate("  WHAT IS RADIUM? ", "A metal"),
        ]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].answer(), "An element");
        assert_eq!(deduped[1].question(), "Who won twice?");
    }

    #[test]
    fn test_distinct_questions_untouched() {
        let input = vec![candidate("A?", "1"), candidate("B?", "2")];
        assert_eq!(dedupe(input.clone()), input);
    }

    proptest! {
        #[test]
        fn prop_dedupe_is_idempotent(questions in prop::collection::vec("[a-cA-C ]{1,4}x", 0..30)) {
            let candidates: Vec<Candidate> = questions
                .iter()
                .filter_map(|q| Candidate::new(q, "answer"))
                .collect();

            let once = dedupe(candidates);
            let twice = dedupe(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
