//! Hangman
//!
//! A letter-guessing game: a secret word is fetched from a word-list service,
//! masked, and revealed as the player guesses letters. Six wrong guesses lose
//! the round.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GuessOutcome};
//!
//! let mut state = GameState::new();
//! let round = state.start_new_round();
//! state.on_word_received(round, "dragon-fly").unwrap();
//!
//! assert_eq!(state.current_display(), "_ _ _ _ _-_ _ _");
//! assert_eq!(state.guess_letter('d'), Ok(GuessOutcome::Correct));
//! assert_eq!(state.current_display(), "D _ _ _ _-_ _ _");
//! ```

// Core domain types
pub mod core;

// Word providers
pub mod source;

// Word lists
pub mod wordlists;

// State machine plus async word fetches
pub mod session;

// Command-line configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
