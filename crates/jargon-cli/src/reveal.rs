//! Cosmetic reveal sequences.
//!
//! The thinking lines and the character-by-character typing animation carry
//! no semantic weight: they are pure sequence generators consumed by the
//! rendering loop, which does all the sleeping and printing. The stored
//! message is always the full formatted reply.

use std::time::Duration;

/// Pause between canned thinking lines.
pub const THINKING_PAUSE: Duration = Duration::from_millis(600);

/// The canned status lines shown before the real model call.
pub fn thinking_steps() -> &'static [&'static str] {
    &[
        "Analyzing team formations...",
        "Evaluating player performance...",
        "Calculating tactical probabilities...",
        "Assessing opponent strategies...",
    ]
}

/// Iterator over increasingly long prefixes of a string.
///
/// Each step extends the previous prefix by one `char`, so multi-byte
/// characters are never split. An empty string yields nothing.
pub struct Typewriter<'a> {
    text: &'a str,
    // Byte index of the next char boundary.
    next: usize,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, next: 0 }
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let ch = self.text[self.next..].chars().next()?;
        self.next += ch.len_utf8();
        Some(&self.text[..self.next])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_grow_to_full_string() {
        let prefixes: Vec<&str> = Typewriter::new("goal").collect();
        assert_eq!(prefixes, vec!["g", "go", "goa", "goal"]);
    }

    #[test]
    fn test_empty_string_yields_nothing() {
        assert_eq!(Typewriter::new("").count(), 0);
    }

    #[test]
    fn test_multibyte_chars_stay_whole() {
        let prefixes: Vec<&str> = Typewriter::new("über ⚽").collect();
        assert_eq!(prefixes.len(), "über ⚽".chars().count());
        assert_eq!(*prefixes.last().unwrap(), "über ⚽");
        // Every yielded prefix is valid UTF-8 by construction; check growth.
        for pair in prefixes.windows(2) {
            assert!(pair[1].starts_with(pair[0]));
            assert!(pair[1].len() > pair[0].len());
        }
    }

    #[test]
    fn test_four_thinking_steps() {
        assert_eq!(thinking_steps().len(), 4);
    }
}
