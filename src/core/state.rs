//! Round state machine
//!
//! `GameState` owns the secret word, the mask, the guessed letters, the
//! wrong-guess counter and the win/loss tally.
//!
//! ```text
//! AwaitingWord ──word──▶ InProgress ──all revealed──▶ Won
//!      │                     │
//!      └─failure─▶ WordUnavailable   └─6 wrong──▶ Lost
//! ```
//!
//! Every phase can go back to `AwaitingWord` through [`GameState::start_new_round`].
//! Each round gets a fresh [`RoundId`]; word deliveries tagged with an older id
//! are rejected, so a slow fetch from an abandoned round can never overwrite a
//! newer one.

use super::mask::Mask;
use super::word::{SecretWord, is_letter};
use rustc_hash::FxHashSet;
use std::fmt;

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Identifies one round; strictly increasing over the life of a `GameState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundId(u64);

impl RoundId {
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the current round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No round has been started yet
    Idle,
    /// A word has been requested and not delivered yet; guesses are disabled
    AwaitingWord,
    /// The word source failed; a new round must be started to retry
    WordUnavailable,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    /// True for `Won` and `Lost`
    #[must_use]
    pub const fn is_round_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::AwaitingWord => "awaiting word",
            Self::WordUnavailable => "word unavailable",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Result of guessing a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The letter was tried earlier this round; nothing changed
    AlreadyGuessed,
    Correct,
    Incorrect,
    CorrectAndWon,
    IncorrectAndLost,
}

impl GuessOutcome {
    /// True when this guess ended the round
    #[must_use]
    pub const fn ends_round(self) -> bool {
        matches!(self, Self::CorrectAndWon | Self::IncorrectAndLost)
    }
}

/// Cumulative results over every round played by this process
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

impl Tally {
    #[must_use]
    pub const fn rounds(self) -> u32 {
        self.wins + self.losses
    }
}

/// Errors raised by round operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word source failed or returned a word that cannot be played
    WordSourceUnavailable(String),
    /// The operation is not allowed in the current phase
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },
    /// A word was delivered for a round that is no longer current
    StaleRound { expected: RoundId, received: RoundId },
    /// The guess is not a letter
    InvalidLetter(char),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordSourceUnavailable(reason) => write!(f, "No word available: {reason}"),
            Self::InvalidState { operation, phase } => {
                write!(f, "Cannot {operation} while the round is {phase}")
            }
            Self::StaleRound { expected, received } => {
                write!(f, "Word for round {received} arrived during round {expected}")
            }
            Self::InvalidLetter(c) => write!(f, "{c:?} is not a letter"),
        }
    }
}

impl std::error::Error for GameError {}

/// State of the current round plus the tally across rounds
#[derive(Debug, Clone)]
pub struct GameState {
    round_id: RoundId,
    phase: Phase,
    secret: Option<SecretWord>,
    mask: Mask,
    guessed: FxHashSet<char>,
    wrong_guesses: u8,
    tally: Tally,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an idle state with an empty tally
    ///
    /// The first call to [`start_new_round`](Self::start_new_round) issues round 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round_id: RoundId(0),
            phase: Phase::Idle,
            secret: None,
            mask: Mask::default(),
            guessed: FxHashSet::default(),
            wrong_guesses: 0,
            tally: Tally::default(),
        }
    }

    /// Discard the current round and wait for a new word
    ///
    /// Allowed in every phase. An unfinished round is dropped without
    /// touching the tally. Returns the id the word delivery must carry.
    pub fn start_new_round(&mut self) -> RoundId {
        self.round_id = RoundId(self.round_id.0 + 1);
        self.phase = Phase::AwaitingWord;
        self.secret = None;
        self.mask = Mask::default();
        self.guessed.clear();
        self.wrong_guesses = 0;
        self.round_id
    }

    /// Install the word fetched for `round` and start play
    ///
    /// # Errors
    /// - `StaleRound` if `round` is not the current round
    /// - `InvalidState` if the current round is not awaiting a word
    /// - `WordSourceUnavailable` if the word cannot be played; the round
    ///   moves to `WordUnavailable`
    pub fn on_word_received(&mut self, round: RoundId, word: &str) -> Result<(), GameError> {
        self.check_delivery(round, "receive a word")?;

        match SecretWord::new(word) {
            Ok(secret) => {
                self.mask = Mask::of(secret.chars());
                self.secret = Some(secret);
                self.phase = Phase::InProgress;
                Ok(())
            }
            Err(e) => {
                self.phase = Phase::WordUnavailable;
                Err(GameError::WordSourceUnavailable(format!("{e} ({word:?})")))
            }
        }
    }

    /// Record that the word source failed for `round`
    ///
    /// # Errors
    /// Same guards as [`on_word_received`](Self::on_word_received) for stale
    /// or out-of-phase deliveries.
    pub fn on_word_unavailable(&mut self, round: RoundId) -> Result<(), GameError> {
        self.check_delivery(round, "report a failed fetch")?;
        self.phase = Phase::WordUnavailable;
        Ok(())
    }

    fn check_delivery(&self, round: RoundId, operation: &'static str) -> Result<(), GameError> {
        if round != self.round_id {
            return Err(GameError::StaleRound {
                expected: self.round_id,
                received: round,
            });
        }
        if self.phase != Phase::AwaitingWord {
            return Err(GameError::InvalidState {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Guess a letter of the secret word
    ///
    /// The letter is case-normalized. A repeated guess returns
    /// `AlreadyGuessed` and changes nothing.
    ///
    /// # Errors
    /// - `InvalidState` unless the round is in progress
    /// - `InvalidLetter` if `letter` is not `A-Z`/`a-z`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GuessOutcome};
    ///
    /// let mut state = GameState::new();
    /// let round = state.start_new_round();
    /// state.on_word_received(round, "cat").unwrap();
    ///
    /// assert_eq!(state.guess_letter('c'), Ok(GuessOutcome::Correct));
    /// assert_eq!(state.guess_letter('c'), Ok(GuessOutcome::AlreadyGuessed));
    /// assert_eq!(state.current_display(), "C _ _");
    /// ```
    pub fn guess_letter(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        let secret = match (&self.secret, self.phase) {
            (Some(secret), Phase::InProgress) => secret,
            _ => {
                return Err(GameError::InvalidState {
                    operation: "guess a letter",
                    phase: self.phase,
                });
            }
        };

        if !is_letter(letter) {
            return Err(GameError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_uppercase();

        if !self.guessed.insert(letter) {
            return Ok(GuessOutcome::AlreadyGuessed);
        }

        if secret.has_letter(letter) {
            self.mask = self.mask.reveal(secret.chars(), letter);
            if self.mask.is_complete() {
                self.tally.wins += 1;
                self.phase = Phase::Won;
                return Ok(GuessOutcome::CorrectAndWon);
            }
            return Ok(GuessOutcome::Correct);
        }

        self.wrong_guesses += 1;
        if self.wrong_guesses >= MAX_WRONG_GUESSES {
            self.tally.losses += 1;
            self.phase = Phase::Lost;
            return Ok(GuessOutcome::IncorrectAndLost);
        }
        Ok(GuessOutcome::Incorrect)
    }

    /// The full secret word, shown to the player after a loss
    ///
    /// # Errors
    /// `InvalidState` unless the round was lost.
    pub fn reveal_secret(&self) -> Result<String, GameError> {
        match (&self.secret, self.phase) {
            (Some(secret), Phase::Lost) => Ok(secret.text()),
            _ => Err(GameError::InvalidState {
                operation: "reveal the secret",
                phase: self.phase,
            }),
        }
    }

    /// Rendered mask; empty until a word has been received
    #[must_use]
    pub fn current_display(&self) -> String {
        self.mask.render()
    }

    #[inline]
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn round_id(&self) -> RoundId {
        self.round_id
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Wrong guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_guesses)
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Letters tried this round, in alphabetical order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Check if a letter was already tried this round (case-insensitive)
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    /// True while letter guesses are accepted
    #[inline]
    #[must_use]
    pub fn accepts_guesses(&self) -> bool {
        self.phase == Phase::InProgress
    }
}
