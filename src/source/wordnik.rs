//! Wordnik random-word client
//!
//! Calls `GET /v4/words.json/randomWords` and takes the first usable word
//! from the JSON array it returns.

use super::{WordConstraints, WordSource, WordSourceError};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Public Wordnik API endpoint for random words
pub const DEFAULT_BASE_URL: &str = "https://api.wordnik.com/v4/words.json/randomWords";

/// One entry of the `randomWords` response
#[derive(Debug, Clone, Deserialize)]
pub struct RandomWord {
    #[serde(default)]
    pub id: i64,
    pub word: String,
}

/// Word source backed by the Wordnik web API
#[derive(Debug, Clone)]
pub struct WordnikSource {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl WordnikSource {
    /// Create a client for the public endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client for a different endpoint (mirrors, local stubs)
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Query parameters for a `randomWords` call
    #[must_use]
    pub fn query_params(&self, constraints: &WordConstraints) -> Vec<(&'static str, String)> {
        vec![
            (
                "hasDictionaryDef",
                constraints.has_dictionary_def.to_string(),
            ),
            ("minCorpusCount", constraints.min_corpus_count.to_string()),
            ("minLength", constraints.min_length.to_string()),
            ("maxLength", constraints.max_length.to_string()),
            ("limit", constraints.limit.to_string()),
            ("api_key", self.api_key.clone()),
        ]
    }
}

/// Pick the first non-blank word from a `randomWords` response body
///
/// # Errors
/// - `Malformed` if the body is not a JSON array of `{ id, word }`
/// - `NoWord` if the array holds no non-blank word
pub fn parse_response(body: &str) -> Result<String, WordSourceError> {
    let words: Vec<RandomWord> =
        serde_json::from_str(body).map_err(|e| WordSourceError::Malformed(e.to_string()))?;

    words
        .into_iter()
        .map(|entry| entry.word.trim().to_string())
        .find(|word| !word.is_empty())
        .ok_or(WordSourceError::NoWord)
}

#[async_trait::async_trait]
impl WordSource for WordnikSource {
    #[instrument(skip_all, fields(min = constraints.min_length, max = constraints.max_length))]
    async fn fetch_random_word(
        &self,
        constraints: &WordConstraints,
    ) -> Result<String, WordSourceError> {
        constraints.validate()?;

        debug!(url = %self.base_url, "Requesting random word");
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(constraints))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Word service rejected request");
            return Err(WordSourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let word = parse_response(&body)?;
        debug!(len = word.len(), "Received word");
        Ok(word)
    }

    fn name(&self) -> &str {
        "wordnik"
    }
}
