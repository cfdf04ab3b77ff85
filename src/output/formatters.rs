//! Formatting utilities for terminal output

use crate::core::MAX_WRONG_GUESSES;

/// Height of every gallows drawing, in lines
pub const GALLOWS_HEIGHT: usize = 7;

const STAGES: [[&str; GALLOWS_HEIGHT]; MAX_WRONG_GUESSES as usize + 1] = [
    [
        "  +---+ ", "  |   | ", "      | ", "      | ", "      | ", "      | ", "========",
    ],
    [
        "  +---+ ", "  |   | ", "  O   | ", "      | ", "      | ", "      | ", "========",
    ],
    [
        "  +---+ ", "  |   | ", "  O   | ", "  |   | ", "      | ", "      | ", "========",
    ],
    [
        "  +---+ ", "  |   | ", "  O   | ", " /|   | ", "      | ", "      | ", "========",
    ],
    [
        "  +---+ ", "  |   | ", "  O   | ", " /|\\  | ", "      | ", "      | ", "========",
    ],
    [
        "  +---+ ", "  |   | ", "  O   | ", " /|\\  | ", " /    | ", "      | ", "========",
    ],
    [
        "  +---+ ", "  |   | ", "  O   | ", " /|\\  | ", " / \\  | ", "      | ", "========",
    ],
];

/// Gallows drawing for a wrong-guess count (clamped to the final stage)
#[must_use]
pub fn gallows(wrong_guesses: u8) -> [&'static str; GALLOWS_HEIGHT] {
    STAGES[usize::from(wrong_guesses.min(MAX_WRONG_GUESSES))]
}

/// Bar of remaining lives, one cell per allowed wrong guess
#[must_use]
pub fn lives_bar(wrong_guesses: u8) -> String {
    let lost = usize::from(wrong_guesses.min(MAX_WRONG_GUESSES));
    let remaining = usize::from(MAX_WRONG_GUESSES) - lost;

    format!("{}{}", "█".repeat(remaining), "░".repeat(lost))
}

/// A-Z with already guessed letters replaced by `·`
#[must_use]
pub fn letter_board(is_guessed: impl Fn(char) -> bool) -> String {
    ('A'..='Z')
        .map(|c| if is_guessed(c) { '·' } else { c })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
