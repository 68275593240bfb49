//! Best-effort extraction of the user's name from their own message.
//!
//! A fixed-phrase heuristic, not a parser. It lives in its own module so
//! it can be replaced wholesale without touching the request path.

use std::sync::LazyLock;

use regex::Regex;

/// Introduction phrase followed by the name to capture. Case folding is
/// scoped to the phrases so the capture class stays plain ASCII letters.
static INTRO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i:my name is|i'm|i am|call me)\s+([a-zA-Z]+)").unwrap());

/// Scan `text` for an introduction phrase and return the word after it.
///
/// Matching is case-insensitive and not word-anchored. The captured name
/// is the run of ASCII letters following the phrase and at least one
/// whitespace character, in its original casing. Returns `None` when no
/// phrase is followed by a capturable name.
pub fn capture_name(text: &str) -> Option<String> {
    INTRO_PATTERN.captures(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Phrase forms ──────────────────────────────────────────────

    #[test]
    fn captures_after_im() {
        assert_eq!(
            capture_name("Hi, I'm Sara, I'd like to book"),
            Some("Sara".to_string())
        );
    }

    #[test]
    fn captures_after_my_name_is() {
        assert_eq!(
            capture_name("my name is jordan"),
            Some("jordan".to_string())
        );
    }

    #[test]
    fn captures_after_i_am() {
        assert_eq!(capture_name("Hello, I am Maria"), Some("Maria".to_string()));
    }

    #[test]
    fn captures_after_call_me() {
        assert_eq!(
            capture_name("Call me Bee please"),
            Some("Bee".to_string())
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(capture_name("MY NAME IS ALEX"), Some("ALEX".to_string()));
        assert_eq!(capture_name("i'M dana"), Some("dana".to_string()));
    }

    // ── Capture boundaries ────────────────────────────────────────

    #[test]
    fn name_keeps_original_casing() {
        assert_eq!(capture_name("i'm McKenna"), Some("McKenna".to_string()));
    }

    #[test]
    fn name_stops_at_first_non_letter() {
        assert_eq!(capture_name("I'm Sara-Jane"), Some("Sara".to_string()));
        assert_eq!(capture_name("I'm Sara, thanks"), Some("Sara".to_string()));
    }

    #[test]
    fn requires_whitespace_after_phrase() {
        assert_eq!(capture_name("I'mSara"), None);
    }

    #[test]
    fn extra_whitespace_is_fine() {
        assert_eq!(capture_name("I'm   Sara"), Some("Sara".to_string()));
    }

    // ── Non-matches ───────────────────────────────────────────────

    #[test]
    fn no_phrase_no_capture() {
        assert_eq!(capture_name("when are you open?"), None);
        assert_eq!(capture_name(""), None);
    }

    #[test]
    fn digits_are_not_a_name() {
        assert_eq!(capture_name("I'm 42"), None);
    }

    #[test]
    fn phrase_at_end_of_text() {
        assert_eq!(capture_name("call me"), None);
        assert_eq!(capture_name("call me "), None);
    }

    // ── Heuristic quirks kept as-is ───────────────────────────────

    #[test]
    fn phrases_are_not_word_anchored() {
        // "hi am Sara" contains "i am" mid-word; the heuristic takes it.
        assert_eq!(capture_name("hi am Sara"), Some("Sara".to_string()));
    }

    #[test]
    fn skips_failed_match_and_keeps_scanning() {
        // "i am 5, call me Max" -- the first phrase has no name after it.
        assert_eq!(
            capture_name("i am 5, call me Max"),
            Some("Max".to_string())
        );
    }

    #[test]
    fn survives_multibyte_text() {
        assert_eq!(capture_name("مرحبا, I'm Lina"), Some("Lina".to_string()));
    }
}
