//! Fetch a single word from the configured source
//!
//! Useful to check an API key or a custom word list before playing.

use crate::core::{Mask, SecretWord};
use crate::source::{WordConstraints, WordSource};
use anyhow::{Context, Result};
use std::time::Duration;

/// A fetched word and its starting mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedWord {
    pub word: String,
    pub masked: String,
}

/// Fetch one word and render its mask
///
/// # Errors
///
/// Returns an error if the source fails, times out, or returns a word that
/// cannot be played.
pub async fn fetch_word(
    source: &dyn WordSource,
    constraints: &WordConstraints,
    timeout: Duration,
) -> Result<FetchedWord> {
    let raw = tokio::time::timeout(timeout, source.fetch_random_word(constraints))
        .await
        .with_context(|| format!("{} did not answer within {timeout:?}", source.name()))?
        .with_context(|| format!("fetching a word from {}", source.name()))?;

    let secret =
        SecretWord::new(&raw).with_context(|| format!("{} returned {raw:?}", source.name()))?;

    Ok(FetchedWord {
        word: secret.text(),
        masked: Mask::of(secret.chars()).render(),
    })
}
