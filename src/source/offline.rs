//! Offline word source
//!
//! Picks random words from an in-memory list: the embedded list by default,
//! or one loaded from a file.

use super::{WordConstraints, WordSource, WordSourceError};
use crate::wordlists::{WORDS, loader::words_from_slice};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Word source drawing from a fixed word list
#[derive(Debug)]
pub struct OfflineWordSource {
    words: Vec<String>,
    rng: Mutex<StdRng>,
}

impl OfflineWordSource {
    /// Create a source over `words`, seeded from the OS
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a source with a fixed seed, for reproducible rounds
    #[must_use]
    pub fn with_seed(words: Vec<String>, seed: u64) -> Self {
        Self {
            words,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Source over the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a word synchronously
    ///
    /// Only the length constraints apply offline; corpus frequency and
    /// definition flags are properties of the remote service.
    ///
    /// # Errors
    /// `InvalidConstraints` for unsatisfiable constraints, `NoWord` when no
    /// listed word fits the length range.
    pub fn pick(&self, constraints: &WordConstraints) -> Result<String, WordSourceError> {
        constraints.validate()?;

        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|word| constraints.accepts_length(word))
            .collect();

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let word = candidates
            .choose(&mut *rng)
            .map(|word| (*word).clone())
            .ok_or(WordSourceError::NoWord)?;

        debug!(candidates = candidates.len(), "Picked offline word");
        Ok(word)
    }
}

#[async_trait::async_trait]
impl WordSource for OfflineWordSource {
    async fn fetch_random_word(
        &self,
        constraints: &WordConstraints,
    ) -> Result<String, WordSourceError> {
        self.pick(constraints)
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn pick_respects_length_range() {
        let source = OfflineWordSource::with_seed(words(&["cat", "lantern", "kaleidoscope"]), 7);
        let constraints = WordConstraints {
            min_length: 5,
            max_length: 8,
            ..WordConstraints::default()
        };

        for _ in 0..20 {
            assert_eq!(source.pick(&constraints).unwrap(), "lantern");
        }
    }

    #[test]
    fn pick_without_match_is_no_word() {
        let source = OfflineWordSource::with_seed(words(&["cat", "dog"]), 1);
        assert!(matches!(
            source.pick(&WordConstraints::default()),
            Err(WordSourceError::NoWord)
        ));
    }

    #[test]
    fn pick_from_empty_list_is_no_word() {
        let source = OfflineWordSource::with_seed(Vec::new(), 1);
        assert!(source.is_empty());
        assert!(matches!(
            source.pick(&WordConstraints::default()),
            Err(WordSourceError::NoWord)
        ));
    }

    #[test]
    fn pick_rejects_invalid_constraints() {
        let source = OfflineWordSource::embedded();
        let constraints = WordConstraints {
            limit: 0,
            ..WordConstraints::default()
        };
        assert!(matches!(
            source.pick(&constraints),
            Err(WordSourceError::InvalidConstraints(_))
        ));
    }

    #[test]
    fn same_seed_same_sequence() {
        let list = words(&["apple", "lemon", "mango", "peach", "grape"]);
        let a = OfflineWordSource::with_seed(list.clone(), 42);
        let b = OfflineWordSource::with_seed(list, 42);
        let constraints = WordConstraints::default();

        let seq_a: Vec<String> = (0..10).map(|_| a.pick(&constraints).unwrap()).collect();
        let seq_b: Vec<String> = (0..10).map(|_| b.pick(&constraints).unwrap()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn embedded_source_has_words_in_default_range() {
        let source = OfflineWordSource::embedded();
        assert!(!source.is_empty());
        let word = source.pick(&WordConstraints::default()).unwrap();
        assert!(WordConstraints::default().accepts_length(&word));
    }

    #[test]
    fn fetch_uses_pick() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let source = OfflineWordSource::with_seed(words(&["lantern"]), 3);
        let word = runtime
            .block_on(source.fetch_random_word(&WordConstraints::default()))
            .unwrap();
        assert_eq!(word, "lantern");
        assert_eq!(source.name(), "offline");
    }
}
