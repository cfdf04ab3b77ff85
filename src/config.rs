//! Game configuration
//!
//! Collects the word-source choice, the word constraints and the fetch
//! timeout from the command line into one value the frontends share.

use crate::session::DEFAULT_FETCH_TIMEOUT;
use crate::source::{OfflineWordSource, WordConstraints, WordSource, WordnikSource};
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors raised while turning configuration into a word source
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the wordnik source needs an API key (--api-key or WORDNIK_API_KEY)")]
    MissingApiKey,

    #[error("cannot read word list {path}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {0} contains no playable words")]
    EmptyWordList(PathBuf),

    #[error(transparent)]
    Constraints(#[from] crate::source::WordSourceError),
}

/// Where words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    /// Wordnik when an API key is available, otherwise the embedded list
    Auto,
    Wordnik,
    /// The embedded word list
    Offline,
    /// A word list file
    File(PathBuf),
}

impl SourceChoice {
    /// Parse the `--source` flag: `auto`, `wordnik`, `offline`, or a file path
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "auto" => Self::Auto,
            "wordnik" => Self::Wordnik,
            "offline" => Self::Offline,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Everything needed to run a session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub source: SourceChoice,
    pub api_key: Option<String>,
    pub constraints: WordConstraints,
    pub timeout: Duration,
    /// Fixed seed for offline word picks
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            source: SourceChoice::Auto,
            api_key: None,
            constraints: WordConstraints::default(),
            timeout: DEFAULT_FETCH_TIMEOUT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Build the configured word source
    ///
    /// # Errors
    /// - `Constraints` if the word constraints are unsatisfiable
    /// - `MissingApiKey` if wordnik is requested without a key
    /// - `WordList`/`EmptyWordList` if a word list file is unusable
    pub fn build_source(&self) -> Result<Arc<dyn WordSource>, ConfigError> {
        self.constraints.validate()?;

        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty());

        let source: Arc<dyn WordSource> = match (&self.source, api_key) {
            (SourceChoice::Wordnik | SourceChoice::Auto, Some(key)) => {
                Arc::new(WordnikSource::new(key))
            }
            (SourceChoice::Wordnik, None) => return Err(ConfigError::MissingApiKey),
            (SourceChoice::Auto | SourceChoice::Offline, _) => {
                Arc::new(self.offline(words_from_slice(WORDS)))
            }
            (SourceChoice::File(path), _) => {
                let words = load_from_file(path).map_err(|source| ConfigError::WordList {
                    path: path.clone(),
                    source,
                })?;
                if words.is_empty() {
                    return Err(ConfigError::EmptyWordList(path.clone()));
                }
                Arc::new(self.offline(words))
            }
        };

        info!(source = source.name(), "Word source ready");
        Ok(source)
    }

    fn offline(&self, words: Vec<String>) -> OfflineWordSource {
        match self.seed {
            Some(seed) => OfflineWordSource::with_seed(words, seed),
            None => OfflineWordSource::new(words),
        }
    }
}
