//! Word providers
//!
//! A `WordSource` supplies one candidate word per call. The game core never
//! sees a source directly; the session runs fetches on the async runtime and
//! hands the result to the state machine.

pub mod offline;
pub mod wordnik;

pub use offline::OfflineWordSource;
pub use wordnik::WordnikSource;

use std::time::Duration;
use thiserror::Error;

/// Errors raised by word sources
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("word service answered with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no word matches the constraints")]
    NoWord,

    #[error("word fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("word source crashed: {0}")]
    Crashed(String),

    #[error("invalid constraints: {0}")]
    InvalidConstraints(String),
}

/// Filters applied when asking a source for a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordConstraints {
    pub min_length: usize,
    pub max_length: usize,
    /// Minimum number of times the word appears in the service's corpus
    pub min_corpus_count: u32,
    /// Only return words with a dictionary definition
    pub has_dictionary_def: bool,
    /// Number of results requested from the service; the first is used
    pub limit: usize,
}

impl Default for WordConstraints {
    fn default() -> Self {
        Self {
            min_length: 5,
            max_length: 15,
            min_corpus_count: 0,
            has_dictionary_def: true,
            limit: 1,
        }
    }
}

impl WordConstraints {
    /// Check the constraints can be satisfied at all
    ///
    /// # Errors
    /// Returns `WordSourceError::InvalidConstraints` when a bound is zero or
    /// the length range is empty.
    pub fn validate(&self) -> Result<(), WordSourceError> {
        if self.min_length == 0 {
            return Err(WordSourceError::InvalidConstraints(
                "minimum length must be at least 1".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(WordSourceError::InvalidConstraints(format!(
                "minimum length {} exceeds maximum length {}",
                self.min_length, self.max_length
            )));
        }
        if self.limit == 0 {
            return Err(WordSourceError::InvalidConstraints(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a word's character count against the length range
    #[must_use]
    pub fn accepts_length(&self, word: &str) -> bool {
        (self.min_length..=self.max_length).contains(&word.chars().count())
    }
}

/// Supplier of random words
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch a single random word satisfying `constraints`
    ///
    /// The word is returned as the source produced it (not uppercased).
    async fn fetch_random_word(
        &self,
        constraints: &WordConstraints,
    ) -> Result<String, WordSourceError>;

    /// Short name used in logs and status lines
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constraints_match_classic_game() {
        let constraints = WordConstraints::default();
        assert_eq!(constraints.min_length, 5);
        assert_eq!(constraints.max_length, 15);
        assert_eq!(constraints.min_corpus_count, 0);
        assert!(constraints.has_dictionary_def);
        assert_eq!(constraints.limit, 1);
        assert!(constraints.validate().is_ok());
    }

    #[test]
    fn constraints_reject_empty_range() {
        let constraints = WordConstraints {
            min_length: 9,
            max_length: 4,
            ..WordConstraints::default()
        };
        assert!(matches!(
            constraints.validate(),
            Err(WordSourceError::InvalidConstraints(_))
        ));
    }

    #[test]
    fn constraints_reject_zero_bounds() {
        let zero_length = WordConstraints {
            min_length: 0,
            ..WordConstraints::default()
        };
        assert!(zero_length.validate().is_err());

        let zero_limit = WordConstraints {
            limit: 0,
            ..WordConstraints::default()
        };
        assert!(zero_limit.validate().is_err());
    }

    #[test]
    fn accepts_length_is_inclusive() {
        let constraints = WordConstraints {
            min_length: 3,
            max_length: 5,
            ..WordConstraints::default()
        };
        assert!(!constraints.accepts_length("ab"));
        assert!(constraints.accepts_length("abc"));
        assert!(constraints.accepts_length("a-b-c"));
        assert!(!constraints.accepts_length("abcdef"));
    }
}
