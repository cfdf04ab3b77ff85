//! Masked display of a secret word
//!
//! A mask holds one character per position of the secret word:
//! - `_` for a letter that has not been guessed yet
//! - the revealed (uppercase) letter once guessed
//! - punctuation (hyphen, apostrophe) copied through unchanged from the start
//!
//! Rendering spaces letters and blanks apart while punctuation fuses with its
//! neighbours, so `DRAGON-FLY` starts out as `_ _ _ _ _-_ _ _`.

use super::word::is_letter;
use std::fmt;

/// The masking character standing in for an unguessed letter
pub const PLACEHOLDER: char = '_';

/// Partially revealed form of a secret word
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mask(Vec<char>);

impl Mask {
    /// Mask every letter of `word`, keeping other characters unchanged
    ///
    /// Total: empty input gives an empty mask.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Mask;
    ///
    /// let word: Vec<char> = "DRAGON-FLY".chars().collect();
    /// assert_eq!(Mask::of(&word).render(), "_ _ _ _ _-_ _ _");
    /// ```
    #[must_use]
    pub fn of(word: &[char]) -> Self {
        Self(
            word.iter()
                .map(|&c| if is_letter(c) { PLACEHOLDER } else { c })
                .collect(),
        )
    }

    /// Reveal every position where `secret` holds `letter`
    ///
    /// Comparison is done on uppercase forms. Positions not holding the letter
    /// are untouched; a letter absent from `secret` returns an identical mask.
    ///
    /// `secret` must be the word this mask was built from, so both have the
    /// same length.
    #[must_use]
    pub fn reveal(&self, secret: &[char], letter: char) -> Self {
        debug_assert_eq!(self.0.len(), secret.len(), "mask and secret lengths differ");
        let letter = letter.to_ascii_uppercase();
        Self(
            self.0
                .iter()
                .zip(secret)
                .map(|(&shown, &actual)| {
                    if actual.to_ascii_uppercase() == letter {
                        letter
                    } else {
                        shown
                    }
                })
                .collect(),
        )
    }

    /// True when no placeholder remains
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&PLACEHOLDER)
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.0.iter().filter(|&&c| c == PLACEHOLDER).count()
    }

    /// Get the mask characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable rendering
    ///
    /// A single space separates two adjacent tokens when both are letters or
    /// placeholders; punctuation is written with no space on either side.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.0.len() * 2);
        let mut prev: Option<char> = None;

        for &c in &self.0 {
            if let Some(p) = prev
                && is_spaced(p)
                && is_spaced(c)
            {
                out.push(' ');
            }
            out.push(c);
            prev = Some(c);
        }

        out
    }
}

/// Letters and placeholders are kept apart by spaces; everything else fuses
#[inline]
const fn is_spaced(c: char) -> bool {
    c == PLACEHOLDER || is_letter(c)
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
