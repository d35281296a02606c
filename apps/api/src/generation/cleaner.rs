//! Line-quality filter for raw model output.
//!
//! Small text-generation models emit fragments, token loops, and stray symbols.
//! A line survives only if it reads like a plain sentence; everything else is
//! dropped whole. Kept lines are trimmed, order is preserved.

use std::collections::HashSet;

/// Minimum whitespace-separated tokens per kept line.
const MIN_TOKENS: usize = 6;
/// A kept line must have strictly more distinct tokens than this.
const MIN_DISTINCT_TOKENS: usize = 4;

/// Punctuation allowed alongside letters and whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    /// `,.:;!?`
    Resume,
    /// `,.:;!?'` so contractions survive in letters.
    CoverLetter,
}

impl Punctuation {
    pub fn allowed(&self) -> &'static str {
        match self {
            Punctuation::Resume => ",.:;!?",
            Punctuation::CoverLetter => ",.:;!?'",
        }
    }
}

/// Returns true if `line` passes every quality check.
pub fn is_meaningful_line(line: &str, punctuation: Punctuation) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return false;
    }

    let distinct: HashSet<&str> = tokens.iter().copied().collect();
    if distinct.len() <= MIN_DISTINCT_TOKENS {
        return false;
    }

    let allowed = punctuation.allowed();
    line.is_ascii()
        && line
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || allowed.contains(c))
}

/// Keeps the lines of `raw` that look like well-formed sentences, joined by `\n`.
/// An input with no qualifying line yields an empty string.
pub fn clean_generated_text(raw: &str, punctuation: Punctuation) -> String {
    raw.trim()
        .split('\n')
        .filter(|line| is_meaningful_line(line, punctuation))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "I build reliable data pipelines for growing teams.";

    #[test]
    fn test_keeps_plain_sentence() {
        assert!(is_meaningful_line(GOOD, Punctuation::Resume));
    }

    #[test]
    fn test_rejects_short_line() {
        assert!(!is_meaningful_line("Too short to keep.", Punctuation::Resume));
    }

    #[test]
    fn test_six_tokens_is_enough() {
        assert!(is_meaningful_line(
            "one two three four five six",
            Punctuation::Resume
        ));
        assert!(!is_meaningful_line(
            "one two three four five",
            Punctuation::Resume
        ));
    }

    #[test]
    fn test_rejects_repetitive_line() {
        // 8 tokens but only 4 distinct
        let line = "the the model model says says it it";
        assert!(!is_meaningful_line(line, Punctuation::Resume));
    }

    #[test]
    fn test_five_distinct_tokens_pass() {
        let line = "alpha beta gamma delta epsilon alpha";
        assert!(is_meaningful_line(line, Punctuation::Resume));
    }

    #[test]
    fn test_rejects_non_ascii() {
        let line = "I build reliable data pipelines for café owners.";
        assert!(!is_meaningful_line(line, Punctuation::Resume));
    }

    #[test]
    fn test_rejects_digits_and_symbols() {
        assert!(!is_meaningful_line(
            "I have worked for 3 years in data analysis.",
            Punctuation::Resume
        ));
        assert!(!is_meaningful_line(
            "Skills include Python - SQL and Rust today",
            Punctuation::Resume
        ));
    }

    #[test]
    fn test_apostrophe_allowed_only_for_letters() {
        let line = "I'm excited to join your amazing team soon.";
        assert!(!is_meaningful_line(line, Punctuation::Resume));
        assert!(is_meaningful_line(line, Punctuation::CoverLetter));
    }

    #[test]
    fn test_clean_preserves_order_and_trims_kept_lines() {
        let raw = "\n   First kept line has enough distinct words.\n@@@ noise\n\
                   Second kept line also has many words here.  \nok\n";
        assert_eq!(
            clean_generated_text(raw, Punctuation::Resume),
            "First kept line has enough distinct words.\n\
             Second kept line also has many words here."
        );
    }

    #[test]
    fn test_clean_all_rejected_is_empty() {
        assert_eq!(
            clean_generated_text("### 1. 2. 3.\n!!!\n", Punctuation::Resume),
            ""
        );
    }
}
