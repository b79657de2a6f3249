//! LLM prompt for the generative strategy.

use sha2::{Digest, Sha256};

/// Prompt asking a model for Q/A flashcards from one chunk.
///
/// The response format is parsed line by line by
/// [`parse_flashcard_response`](super::response::parse_flashcard_response),
/// so the `Q:` / `A:` markers must stay literal.
pub const GENERATIVE_PROMPT: &str = r#"Generate {count} concise flashcards from this text. Follow exactly:

Text: {text}

Format each flashcard as:
Q: [Clear question about key concept]
A: [Succinct answer, max {answer_words} words]

Focus on:
- Key terms and definitions
- Cause-effect relationships
- Important dates/figures (if applicable)"#;

/// Generate a hash of the generative prompt for log correlation.
pub fn generative_prompt_hash() -> String {
    let mut hasher = Sha256::new();
    hasher.update(GENERATIVE_PROMPT.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Format the generative prompt with the chunk text.
pub fn format_generative_prompt(text: &str, count: usize, answer_words: usize) -> String {
    GENERATIVE_PROMPT
        .replace("{count}", &count.to_string())
        .replace("{answer_words}", &answer_words.to_string())
        .replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_hash_is_consistent() {
        let hash1 = generative_prompt_hash();
        let hash2 = generative_prompt_hash();
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // SHA-256 hex
    }

    #[test]
    fn test_format_generative_prompt() {
        let formatted = format_generative_prompt("Water boils at 100 C.", 5, 15);
        assert!(formatted.starts_with("Generate 5 concise flashcards"));
        assert!(formatted.contains("Text: Water boils at 100 C."));
        assert!(formatted.contains("max 15 words"));
        assert!(formatted.contains("Q: [Clear question"));
    }

    #[test]
    fn test_chunk_text_is_inserted_verbatim() {
        // Placeholders inside the chunk must survive untouched.
        let formatted = format_generative_prompt("Use {count} apples.", 5, 15);
        assert!(formatted.contains("Text: Use {count} apples."));
    }
}
