//! Secret word representation
//!
//! A `SecretWord` stores the uppercase characters of the word being guessed,
//! along with the set of distinct letters it contains for fast guess checks.

use rustc_hash::FxHashSet;
use std::fmt;

/// Non-letter characters a secret word may contain. They are never masked.
pub const PUNCTUATION: [char; 2] = ['-', '\''];

/// The word a round is played on, fixed for the lifetime of that round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    chars: Vec<char>,
    letters: FxHashSet<char>,
}

/// Error type for unusable words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NoLetters,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word is empty"),
            Self::NoLetters => write!(f, "Word contains no letters to guess"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word contains unsupported character {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Check whether a character belongs to the guessable letter class (`A-Z`, `a-z`)
#[inline]
#[must_use]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

impl SecretWord {
    /// Create a new secret word from the text a word source returned
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty after trimming
    /// - It contains anything other than ASCII letters, hyphens or apostrophes
    /// - It contains no letters at all
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("dragon-fly").unwrap();
    /// assert_eq!(word.text(), "DRAGON-FLY");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text
            .chars()
            .find(|&c| !is_letter(c) && !PUNCTUATION.contains(&c))
        {
            return Err(WordError::InvalidCharacter(bad));
        }

        let chars: Vec<char> = text.chars().map(|c| c.to_ascii_uppercase()).collect();
        let letters: FxHashSet<char> = chars.iter().copied().filter(|&c| is_letter(c)).collect();

        if letters.is_empty() {
            return Err(WordError::NoLetters);
        }

        Ok(Self { chars, letters })
    }

    /// Get the word's characters in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Get the word as an uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Number of characters, including punctuation
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; a secret word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// Number of distinct letters a player must find
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
