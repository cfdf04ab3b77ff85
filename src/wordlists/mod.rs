//! Word lists for offline play
//!
//! Provides the embedded word list compiled into the binary, used when no
//! remote word service is configured.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_playable() {
        for &word in WORDS {
            assert!(SecretWord::new(word).is_ok(), "Word '{word}' is not playable");
        }
    }

    #[test]
    fn words_fit_default_lengths() {
        for &word in WORDS {
            let len = word.chars().count();
            assert!((5..=15).contains(&len), "Word '{word}' has length {len}");
        }
    }

    #[test]
    fn words_include_punctuated_entries() {
        assert!(WORDS.iter().any(|w| w.contains('-')));
        assert!(WORDS.iter().any(|w| w.contains('\'')));
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 238, "Expected 238 embedded words");
    }
}
