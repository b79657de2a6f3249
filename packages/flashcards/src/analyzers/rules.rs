//! Rule-based text analyzer.
//!
//! A lightweight stand-in for a full NLP engine with a deliberately bounded
//! contract:
//! - Sentences: punctuation boundaries (see [`split_sentences`])
//! - Entities: date patterns plus runs of capitalized words, categorized by
//!   cue words (`University`, `River`, `War`, titles, `in`/`at`)
//! - Noun phrases: `(DET)? (ADJ)* (NOUN|PROPN)+`, at least two tokens
//! - Tokens: closed-class word lists, then suffix guesses for open-class words

use std::sync::LazyLock;

use regex::{Match, Regex};

use super::lexicon::{
    categorize_span, closed_class, guess_open_class, irregular_verb, is_capitalized, is_month,
    is_stop_word, is_verb_trigger, lemmatize,
};
use super::segment::split_sentences;
use crate::error::AnalyzerError;
use crate::traits::analyzer::{
    EntityCategory, EntitySpan, NounPhrase, PartOfSpeech, Tagging, TextAnalyzer, Token,
};
use crate::types::chunk::Sentence;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z'\-]*|\d+(?:[.,]\d+)*").unwrap());

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)(?:\s+\d{1,2})?(?:,?\s+\d{4})?\b|\b(?:1[0-9]|20)\d{2}\b",
    )
    .unwrap()
});

/// Connectors allowed inside a capitalized run ("University of Paris").
const SPAN_CONNECTORS: &[&str] = &["of", "de", "von", "van"];

/// Punctuation segmentation with heuristic tagging.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAnalyzer;

impl RuleAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl TextAnalyzer for RuleAnalyzer {
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, AnalyzerError> {
        Ok(split_sentences(text))
    }

    fn tag(&self, text: &str) -> Result<Tagging, AnalyzerError> {
        let sentences = split_sentences(text);
        let mut tagging = Tagging::default();

        for (index, sentence) in sentences.iter().enumerate() {
            let words: Vec<Match<'_>> = WORD.find_iter(&sentence.text).collect();
            let tokens = tag_tokens(&words, index);

            tagging
                .entities
                .extend(find_entities(&sentence.text, &words, index));
            tagging
                .noun_phrases
                .extend(find_noun_phrases(&tokens, index));
            tagging.tokens.extend(tokens);
        }

        tagging.sentences = sentences;
        Ok(tagging)
    }
}

fn tag_tokens(words: &[Match<'_>], sentence: usize) -> Vec<Token> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let text = word.as_str();
            let lower = text.to_lowercase();

            let (pos, lemma) = if text.starts_with(|c: char| c.is_ascii_digit()) {
                (PartOfSpeech::Numeral, lower)
            } else if let Some(closed) = closed_class(text) {
                closed
            } else if let Some(lemma) = irregular_verb(&lower) {
                (PartOfSpeech::Verb, lemma.to_string())
            } else if is_capitalized(text) {
                (PartOfSpeech::ProperNoun, text.to_string())
            } else if i > 0 && is_verb_trigger(words[i - 1].as_str()) {
                (PartOfSpeech::Verb, lemmatize(&lower, PartOfSpeech::Verb))
            } else {
                let pos = guess_open_class(&lower);
                (pos, lemmatize(&lower, pos))
            };

            Token {
                text: text.to_string(),
                pos,
                lemma,
                is_stop: is_stop_word(text),
                sentence,
            }
        })
        .collect()
}

fn find_entities(text: &str, words: &[Match<'_>], sentence: usize) -> Vec<EntitySpan> {
    let mut found: Vec<(usize, EntitySpan)> = DATE
        .find_iter(text)
        .map(|m| {
            (
                m.start(),
                EntitySpan {
                    text: m.as_str().to_string(),
                    category: EntityCategory::Date,
                    sentence,
                },
            )
        })
        .collect();

    let mut i = 0;
    while i < words.len() {
        if !starts_span(words[i].as_str()) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        loop {
            if end < words.len() && starts_span(words[end].as_str()) {
                end += 1;
            } else if end + 1 < words.len()
                && SPAN_CONNECTORS.contains(&words[end].as_str())
                && starts_span(words[end + 1].as_str())
            {
                end += 2;
            } else {
                break;
            }
        }

        let span: Vec<&str> = words[start..end].iter().map(|m| m.as_str()).collect();
        let previous = start.checked_sub(1).map(|p| words[p].as_str());

        found.push((
            words[start].start(),
            EntitySpan {
                text: span.join(" "),
                category: categorize_span(&span, previous),
                sentence,
            },
        ));
        i = end;
    }

    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, span)| span).collect()
}

/// Capitalized content word that can open or extend an entity run.
fn starts_span(word: &str) -> bool {
    is_capitalized(word) && !is_stop_word(word) && !is_month(word)
}

fn find_noun_phrases(tokens: &[Token], sentence: usize) -> Vec<NounPhrase> {
    let mut phrases = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let start = i;
        let mut j = i;

        if tokens[j].pos == PartOfSpeech::Determiner {
            j += 1;
        }
        while j < tokens.len() && tokens[j].pos == PartOfSpeech::Adjective {
            j += 1;
        }
        let nouns_start = j;
        while j < tokens.len()
            && matches!(tokens[j].pos, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
        {
            j += 1;
        }

        if j > nouns_start && j - start >= 2 {
            let phrase = &tokens[start..j];
            let head = &tokens[j - 1];

            phrases.push(NounPhrase {
                text: phrase
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                head_lemma: head.lemma.clone(),
                head_pos: head.pos,
                contains_stop_word: phrase.iter().any(|t| t.is_stop),
                sentence,
            });
            i = j;
        } else {
            i = start + 1;
        }
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(text: &str) -> Tagging {
        RuleAnalyzer::new().tag(text).unwrap()
    }

    #[test]
    fn test_segment_matches_punctuation_split() {
        let sentences = RuleAnalyzer::new()
            .segment("Marie Curie discovered radium. She won the Nobel Prize twice.")
            .unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].text, "She won the Nobel Prize twice.");
    }

    #[test]
    fn test_person_entity_found() {
        let tagging = tag("Marie Curie discovered radium.");
        let person = tagging
            .entities
            .iter()
            .find(|e| e.text == "Marie Curie")
            .unwrap();
        assert_eq!(person.category, EntityCategory::Person);
        assert_eq!(person.sentence, 0);
    }

    #[test]
    fn test_dates_and_locations() {
        let tagging = tag("The treaty was signed in Versailles on June 28, 1919.");
        let categories: Vec<_> = tagging
            .entities
            .iter()
            .map(|e| (e.text.as_str(), e.category))
            .collect();
        assert_eq!(
            categories,
            vec![
                ("Versailles", EntityCategory::Location),
                ("June 28, 1919", EntityCategory::Date),
            ]
        );
    }

    #[test]
    fn test_connector_joins_capitalized_run() {
        let tagging = tag("She studied at the University of Paris.");
        assert!(tagging
            .entities
            .iter()
            .any(|e| e.text == "University of Paris"
                && e.category == EntityCategory::Organization));
    }

    #[test]
    fn test_sentence_initial_stop_word_is_not_an_entity() {
        let tagging = tag("The experiment failed.");
        assert!(tagging.entities.is_empty());
    }

    #[test]
    fn test_verbs_are_lemmatized() {
        let tagging = tag("Marie Curie discovered radium. She won the Nobel Prize twice.");
        let verbs: Vec<_> = tagging
            .tokens
            .iter()
            .filter(|t| t.pos == PartOfSpeech::Verb)
            .map(|t| (t.lemma.as_str(), t.sentence))
            .collect();
        assert_eq!(verbs, vec![("discover", 0), ("win", 1)]);
    }

    #[test]
    fn test_noun_phrase_with_common_head() {
        let tagging = tag("The atoms released radioactive energy.");
        let phrase = tagging
            .noun_phrases
            .iter()
            .find(|p| p.text == "radioactive energy")
            .unwrap();
        assert_eq!(phrase.head_lemma, "energy");
        assert_eq!(phrase.head_pos, PartOfSpeech::Noun);
        assert!(!phrase.contains_stop_word);
    }

    #[test]
    fn test_determiner_marks_phrase_as_containing_stop_word() {
        let tagging = tag("It emits the strong radiation.");
        let phrase = tagging
            .noun_phrases
            .iter()
            .find(|p| p.text == "the strong radiation")
            .unwrap();
        assert!(phrase.contains_stop_word);
        assert_eq!(phrase.head_lemma, "radiation");
    }

    #[test]
    fn test_sentence_text_lookup() {
        let tagging = tag("One fact. Another fact.");
        assert_eq!(tagging.sentence_text(1), "Another fact.");
        assert_eq!(tagging.sentence_text(9), "");
    }
}
