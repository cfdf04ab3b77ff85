//! Core domain types for hangman
//!
//! This module holds the masking engine and the round state machine.
//! Everything here is synchronous and free of I/O; word fetching and
//! presentation live in the outer modules.

mod mask;
mod state;
mod word;

pub use mask::{Mask, PLACEHOLDER};
pub use state::{GameError, GameState, GuessOutcome, MAX_WRONG_GUESSES, Phase, RoundId, Tally};
pub use word::{PUNCTUATION, SecretWord, WordError, is_letter};
