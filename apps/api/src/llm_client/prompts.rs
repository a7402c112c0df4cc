// Shared prompt fragments and prompt-building utilities.
// Each capability that talks to the model defines its own prompts.rs
// alongside its handlers; this file holds the cross-cutting pieces.

/// Instruction appended to every JSON-mode system message.
pub const JSON_ONLY_INSTRUCTION: &str =
    "IMPORTANT: Respond ONLY with valid JSON. No markdown, no explanation, no backticks.";

/// Truncates `text` to at most `max_chars` characters, on a char boundary.
///
/// Prompt budgets are counted in characters, not bytes — resumes pasted from
/// the wild routinely carry multi-byte punctuation.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_budget() {
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_truncate_at_budget() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Each ₹ is three bytes; four chars must survive, not one.
        assert_eq!(truncate_chars("₹₹₹₹₹₹", 4), "₹₹₹₹");
    }
}
