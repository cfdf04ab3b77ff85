//! Display functions for line-mode play

use super::formatters::{gallows, letter_board, lives_bar};
use crate::core::{GameState, GuessOutcome, Tally};
use colored::Colorize;

/// Print the gallows, the masked word, lives and the letter board
pub fn print_round_state(state: &GameState) {
    println!("\n{}", "─".repeat(60).cyan());
    for line in gallows(state.wrong_guesses()) {
        println!("   {line}");
    }
    println!();
    println!(
        "   Word:    {}",
        state.current_display().bright_yellow().bold()
    );
    println!(
        "   Lives:   {} {}",
        lives_bar(state.wrong_guesses()).red(),
        state.remaining_guesses()
    );
    println!(
        "   Letters: {}",
        letter_board(|c| state.is_guessed(c)).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print a one-line reaction to a guess
pub fn print_guess_outcome(letter: char, outcome: GuessOutcome) {
    let letter = letter.to_ascii_uppercase();
    match outcome {
        GuessOutcome::AlreadyGuessed => {
            println!("{}", format!("You already tried {letter}.").yellow());
        }
        GuessOutcome::Correct | GuessOutcome::CorrectAndWon => {
            println!("{}", format!("✓ {letter} is in the word!").green());
        }
        GuessOutcome::Incorrect | GuessOutcome::IncorrectAndLost => {
            println!("{}", format!("✗ No {letter}.").red());
        }
    }
}

/// Print the win banner
pub fn print_win(state: &GameState) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  Y O U   W I N !  🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  You guessed {} with {} wrong {}.",
        state.current_display().bright_white().bold(),
        state.wrong_guesses(),
        if state.wrong_guesses() == 1 {
            "guess"
        } else {
            "guesses"
        }
    );
}

/// Print the loss banner with the revealed word
pub fn print_loss(state: &GameState, secret: &str) {
    for line in gallows(state.wrong_guesses()) {
        println!("   {}", line.red());
    }
    println!("\n{}", "═".repeat(60).red());
    println!("{}", "    💀  Y O U   L O S E  💀    ".red().bold());
    println!("{}", "═".repeat(60).red());
    println!(
        "\n  The secret word was: {}",
        secret.bright_white().bold()
    );
}

/// Print cumulative wins and losses
pub fn print_tally(tally: Tally) {
    println!(
        "\n  Total wins: {}   Total losses: {}\n",
        tally.wins.to_string().green().bold(),
        tally.losses.to_string().red().bold()
    );
}
