//! Word lists and suffix rules for the rule-based analyzer.

use crate::traits::analyzer::{EntityCategory, PartOfSpeech};

/// English stop words (lowercase).
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "may", "me", "might", "more", "most", "must", "my", "myself", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "same", "shall", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
    "your", "yours", "yourself", "yourselves",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "this",
    "that", "these", "those", "who", "whom", "which", "what", "myself", "yourself", "himself",
    "herself", "itself", "ourselves", "themselves",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "my", "your", "his", "its", "our", "their", "each", "every", "some",
    "any", "no", "all", "both", "few",
];

const ADPOSITIONS: &[&str] = &[
    "about", "above", "after", "against", "at", "before", "below", "between", "by", "down",
    "during", "for", "from", "in", "into", "of", "off", "on", "over", "through", "to", "under",
    "until", "up", "with",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "because", "if", "while", "than", "when", "where",
];

/// Auxiliary forms and their lemma.
const AUXILIARIES: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("be", "be"),
    ("been", "be"), ("being", "be"), ("has", "have"), ("have", "have"), ("had", "have"),
    ("having", "have"), ("do", "do"), ("does", "do"), ("did", "do"), ("doing", "do"),
    ("can", "can"), ("could", "could"), ("may", "may"), ("might", "might"), ("must", "must"),
    ("shall", "shall"), ("should", "should"), ("will", "will"), ("would", "would"),
];

/// Words after which a plain word is read as a base-form verb.
const VERB_TRIGGERS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "did",
    "does", "do",
];

/// Common irregular past forms and their lemma.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("won", "win"), ("made", "make"), ("took", "take"), ("gave", "give"), ("found", "find"),
    ("became", "become"), ("began", "begin"), ("wrote", "write"), ("led", "lead"),
    ("built", "build"), ("held", "hold"), ("brought", "bring"), ("taught", "teach"),
    ("thought", "think"), ("grew", "grow"), ("went", "go"), ("came", "come"), ("met", "meet"),
    ("fought", "fight"), ("lost", "lose"), ("sold", "sell"), ("told", "tell"), ("kept", "keep"),
    ("spent", "spend"), ("sent", "send"), ("knew", "know"), ("drew", "draw"), ("flew", "fly"),
];

/// Adverbs with no telltale suffix.
const PLAIN_ADVERBS: &[&str] = &[
    "twice", "often", "never", "always", "soon", "later", "still", "already", "ever", "almost",
    "perhaps", "together", "however", "therefore",
];

const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const TITLES: &[&str] = &["Mr", "Mrs", "Ms", "Dr", "Prof", "Sir", "Lady", "Lord", "King", "Queen"];

const ORGANIZATION_WORDS: &[&str] = &[
    "Inc", "Corp", "Corporation", "Company", "University", "Institute", "Academy", "Society",
    "Association", "Foundation", "Agency", "Council", "Committee", "Party", "Bank", "College",
    "School", "Museum", "Church", "Ministry", "Department", "Laboratory",
];

const LOCATION_WORDS: &[&str] = &[
    "City", "River", "Mountain", "Mountains", "Lake", "Ocean", "Sea", "Island", "Islands",
    "Valley", "County", "State", "Kingdom", "Republic", "Empire", "Street", "Bay", "Desert",
];

const EVENT_WORDS: &[&str] = &[
    "War", "Revolution", "Festival", "Olympics", "Games", "Conference", "Treaty", "Battle",
    "Crisis", "Summit", "Rebellion", "Expedition",
];

/// Prepositions that usually introduce a place.
const LOCATION_CUES: &[&str] = &["in", "at", "near", "across"];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less"];

const VERB_SUFFIXES: &[&str] = &["ize", "izes", "ify", "ifies", "ified"];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ance", "ence", "ship", "ure",
];

/// Stem endings that take back a silent `e` once `-ed` is removed.
const SILENT_E_STEMS: &[&str] = &["at", "iz", "is", "uc", "iv", "lv", "rv", "bl", "ag", "ur", "ot"];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word.to_lowercase().as_str())
}

pub fn is_month(word: &str) -> bool {
    MONTHS.contains(&word)
}

pub fn is_title(word: &str) -> bool {
    TITLES.contains(&word.trim_end_matches('.'))
}

pub fn is_location_cue(word: &str) -> bool {
    LOCATION_CUES.contains(&word.to_lowercase().as_str())
}

pub fn is_verb_trigger(word: &str) -> bool {
    VERB_TRIGGERS.contains(&word.to_lowercase().as_str())
}

pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Closed-class tag for a word, if it belongs to one.
pub fn closed_class(word: &str) -> Option<(PartOfSpeech, String)> {
    let lower = word.to_lowercase();

    if let Some((_, lemma)) = AUXILIARIES.iter().find(|(form, _)| *form == lower) {
        return Some((PartOfSpeech::Auxiliary, lemma.to_string()));
    }

    let pos = if DETERMINERS.contains(&lower.as_str()) {
        PartOfSpeech::Determiner
    } else if PRONOUNS.contains(&lower.as_str()) {
        PartOfSpeech::Pronoun
    } else if ADPOSITIONS.contains(&lower.as_str()) {
        PartOfSpeech::Adposition
    } else if CONJUNCTIONS.contains(&lower.as_str()) {
        PartOfSpeech::Conjunction
    } else if PLAIN_ADVERBS.contains(&lower.as_str()) {
        PartOfSpeech::Adverb
    } else if STOP_WORDS.contains(&lower.as_str()) {
        PartOfSpeech::Other
    } else {
        return None;
    };

    Some((pos, lower))
}

/// Lemma of an irregular past-tense verb.
pub fn irregular_verb(lower: &str) -> Option<&'static str> {
    IRREGULAR_VERBS
        .iter()
        .find(|(form, _)| *form == lower)
        .map(|(_, lemma)| *lemma)
}

/// Suffix-based guess for an open-class word.
pub fn guess_open_class(lower: &str) -> PartOfSpeech {
    if lower.len() > 4 && lower.ends_with("ly") {
        return PartOfSpeech::Adverb;
    }
    if lower.len() > 4 && lower.ends_with("ed") {
        return PartOfSpeech::Verb;
    }
    if VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PartOfSpeech::Verb;
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PartOfSpeech::Noun;
    }
    if lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PartOfSpeech::Adjective;
    }
    PartOfSpeech::Noun
}

/// Base form for a tagged word.
pub fn lemmatize(lower: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Verb => verb_lemma(lower),
        PartOfSpeech::Noun => noun_lemma(lower),
        _ => lower.to_string(),
    }
}

fn verb_lemma(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ied") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ed") {
        let bytes = stem.as_bytes();
        if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
            let last = bytes[bytes.len() - 1];
            if !matches!(last, b'l' | b's' | b'z' | b'f') {
                return stem[..stem.len() - 1].to_string();
            }
        }
        if SILENT_E_STEMS.iter().any(|s| stem.ends_with(s)) {
            return format!("{stem}e");
        }
        return stem.to_string();
    }
    if let Some(stem) = word.strip_suffix("ifies") {
        return format!("{stem}ify");
    }
    if word.ends_with("izes") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn noun_lemma(word: &str) -> String {
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if word.ends_with("sses") || word.ends_with("ches") || word.ends_with("shes") {
        return word[..word.len() - 2].to_string();
    }
    if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Category for a capitalized span, from its words and the word before it.
pub fn categorize_span(words: &[&str], previous: Option<&str>) -> EntityCategory {
    let Some(last) = words.last() else {
        return EntityCategory::Other;
    };

    if words.iter().any(|w| ORGANIZATION_WORDS.contains(w)) {
        return EntityCategory::Organization;
    }
    if words.len() == 1 && last.len() >= 2 && last.chars().all(|c| c.is_ascii_uppercase()) {
        return EntityCategory::Organization;
    }
    if EVENT_WORDS.contains(last) {
        return EntityCategory::Event;
    }
    if LOCATION_WORDS.contains(last) || previous.is_some_and(is_location_cue) {
        return EntityCategory::Location;
    }
    if is_title(words[0]) || (2..=3).contains(&words.len()) {
        return EntityCategory::Person;
    }
    EntityCategory::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_case_insensitive() {
        assert!(is_stop_word("The"));
        assert!(is_stop_word("she"));
        assert!(!is_stop_word("radium"));
    }

    #[test]
    fn test_auxiliaries_map_to_lemma() {
        assert_eq!(
            closed_class("was"),
            Some((PartOfSpeech::Auxiliary, "be".to_string()))
        );
        assert_eq!(
            closed_class("Has"),
            Some((PartOfSpeech::Auxiliary, "have".to_string()))
        );
        assert_eq!(closed_class("radium"), None);
        assert_eq!(
            closed_class("twice"),
            Some((PartOfSpeech::Adverb, "twice".to_string()))
        );
        assert_eq!(irregular_verb("won"), Some("win"));
    }

    #[test]
    fn test_open_class_guesses() {
        assert_eq!(guess_open_class("discovered"), PartOfSpeech::Verb);
        assert_eq!(guess_open_class("quickly"), PartOfSpeech::Adverb);
        assert_eq!(guess_open_class("radioactive"), PartOfSpeech::Adjective);
        assert_eq!(guess_open_class("radiation"), PartOfSpeech::Noun);
        assert_eq!(guess_open_class("element"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_verb_lemmas() {
        assert_eq!(lemmatize("discovered", PartOfSpeech::Verb), "discover");
        assert_eq!(lemmatize("created", PartOfSpeech::Verb), "create");
        assert_eq!(lemmatize("stopped", PartOfSpeech::Verb), "stop");
        assert_eq!(lemmatize("studied", PartOfSpeech::Verb), "study");
        assert_eq!(lemmatize("organizes", PartOfSpeech::Verb), "organize");
    }

    #[test]
    fn test_noun_lemmas() {
        assert_eq!(lemmatize("elements", PartOfSpeech::Noun), "element");
        assert_eq!(lemmatize("discoveries", PartOfSpeech::Noun), "discovery");
        assert_eq!(lemmatize("glasses", PartOfSpeech::Noun), "glass");
        assert_eq!(lemmatize("radius", PartOfSpeech::Noun), "radius");
    }

    #[test]
    fn test_categorize_span() {
        assert_eq!(categorize_span(&["Marie", "Curie"], None), EntityCategory::Person);
        assert_eq!(
            categorize_span(&["University", "Paris"], None),
            EntityCategory::Organization
        );
        assert_eq!(categorize_span(&["NASA"], None), EntityCategory::Organization);
        assert_eq!(categorize_span(&["Warsaw"], Some("in")), EntityCategory::Location);
        assert_eq!(
            categorize_span(&["Franco", "Prussian", "War"], None),
            EntityCategory::Event
        );
        assert_eq!(categorize_span(&["Radium"], None), EntityCategory::Other);
    }
}
