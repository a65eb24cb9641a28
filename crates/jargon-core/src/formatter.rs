//! Reply truncation and formatting.
//!
//! The one piece of real logic in the pipeline: a raw model completion is
//! reduced to a bounded display string. Replies with enough words are hard
//! truncated to the first `min_words` tokens; under-length replies are
//! suffixed with a literal ellipsis instead of being padded.

/// The word budget applied to every displayed reply.
pub const REPLY_WORD_LIMIT: usize = 4;

/// Formats a raw model reply into the bounded display string.
///
/// Splits `raw` on whitespace. If there are at least `min_words` tokens, the
/// first `min_words` are joined by single spaces; otherwise the original text
/// is returned with `" ..."` appended. No punctuation-aware splitting, no
/// word selection heuristics.
///
/// Always returns a value, including for empty input (`""` becomes `" ..."`).
///
/// Note: this is not idempotent on the short path. Re-formatting a string
/// that already carries the ellipsis suffix and still has fewer than
/// `min_words` tokens appends another ellipsis.
pub fn format_reply(raw: &str, min_words: usize) -> String {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.len() >= min_words {
        words[..min_words].join(" ")
    } else {
        format!("{raw} ...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_first_four_words() {
        assert_eq!(
            format_reply("Pressing high in midfield today", REPLY_WORD_LIMIT),
            "Pressing high in midfield"
        );
    }

    #[test]
    fn test_exactly_four_words_pass_through() {
        assert_eq!(
            format_reply("Low block counter attack", REPLY_WORD_LIMIT),
            "Low block counter attack"
        );
    }

    #[test]
    fn test_short_reply_gets_ellipsis() {
        assert_eq!(format_reply("Offside", REPLY_WORD_LIMIT), "Offside ...");
    }

    #[test]
    fn test_empty_input_yields_ellipsis() {
        assert_eq!(format_reply("", REPLY_WORD_LIMIT), " ...");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(
            format_reply("  Inverted   fullback\toverloads\nhalfspace again ", REPLY_WORD_LIMIT),
            "Inverted fullback overloads halfspace"
        );
    }

    #[test]
    fn test_error_string_is_exactly_four_tokens() {
        // The fixed substitute reply flows through the same pipeline and
        // must come out unchanged.
        assert_eq!(
            format_reply("Error contacting model.", REPLY_WORD_LIMIT),
            "Error contacting model."
        );
    }

    #[test]
    fn test_not_idempotent_on_short_path() {
        // Known behavior: a short reply picks up an extra ellipsis on every
        // pass through the formatter.
        let once = format_reply("Offside", REPLY_WORD_LIMIT);
        let twice = format_reply(&once, REPLY_WORD_LIMIT);
        assert_eq!(once, "Offside ...");
        assert_eq!(twice, "Offside ... ...");
    }

    #[test]
    fn test_min_words_other_than_four() {
        assert_eq!(format_reply("Tiki taka possession play", 2), "Tiki taka");
        assert_eq!(format_reply("Tiki taka", 3), "Tiki taka ...");
    }
}
