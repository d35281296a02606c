//! Cuts generated text at a document boundary.

/// Closing phrases tried after the caller's primary stop phrase.
pub const FALLBACK_STOP_PHRASES: [&str; 4] =
    ["Warm regards", "Thank you", "Sincerely", "Best regards"];

/// Line cap applied when no stop phrase occurs.
pub const FALLBACK_LINE_LIMIT: usize = 12;

/// Truncates `text` at the first stop phrase that occurs anywhere in it.
///
/// Candidates are tried in list order (primary first, then
/// [`FALLBACK_STOP_PHRASES`]), not by position: a listed-earlier phrase wins even
/// when a listed-later one appears sooner in the text. The result is the text
/// before the phrase, trimmed, then `\n` and the phrase itself. With no phrase
/// present the first [`FALLBACK_LINE_LIMIT`] lines are returned.
pub fn truncate_after(text: &str, stop_phrase: &str) -> String {
    let candidates = std::iter::once(stop_phrase).chain(FALLBACK_STOP_PHRASES);

    for phrase in candidates {
        if let Some(idx) = text.find(phrase) {
            return format!("{}\n{}", text[..idx].trim(), phrase);
        }
    }

    text.split('\n')
        .take(FALLBACK_LINE_LIMIT)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuts_at_primary_phrase() {
        let text = "Objective: build things.\nExperience: lots\nmore noise";
        assert_eq!(
            truncate_after(text, "Experience:"),
            "Objective: build things.\nExperience:"
        );
    }

    #[test]
    fn test_priority_beats_position() {
        // "Sincerely" appears first in the text but "Warm regards" is listed earlier.
        let text = "Dear team,\nSincerely, me\nBody continues here.\nWarm regards\nnoise";
        assert_eq!(
            truncate_after(text, "Never present"),
            "Dear team,\nSincerely, me\nBody continues here.\nWarm regards"
        );
    }

    #[test]
    fn test_primary_phrase_beats_earlier_fallback() {
        let text = "Thank you for reading.\nExperience: ignored tail";
        assert_eq!(
            truncate_after(text, "Experience:"),
            "Thank you for reading.\nExperience:"
        );
    }

    #[test]
    fn test_fallback_keeps_first_twelve_lines() {
        let lines: Vec<String> = (1..=20).map(|i| format!("line {i}")).collect();
        let text = lines.join("\n");
        let out = truncate_after(&text, "Warm regards");
        assert_eq!(out, lines[..12].join("\n"));
        assert_eq!(out.lines().count(), 12);
    }

    #[test]
    fn test_fallback_short_text_untouched() {
        assert_eq!(truncate_after("a\nb", "Warm regards"), "a\nb");
    }

    #[test]
    fn test_phrase_at_start_yields_phrase_only() {
        assert_eq!(truncate_after("Best regards, Jane", "nope"), "\nBest regards");
    }
}
