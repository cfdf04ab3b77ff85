//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI

use crate::core::{GameError, GuessOutcome};
use crate::output::{print_guess_outcome, print_loss, print_round_state, print_tally, print_win};
use crate::session::{Session, SessionEvent};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// What the player chose at the end of a round
enum Next {
    NewRound,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Hangman - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word one letter at a time.");
    println!("Six wrong guesses and you're done for.\n");
    println!("Commands: 'quit' to exit, 'new' to give up and start a new word\n");

    loop {
        match fetch_word(session)? {
            SessionEvent::WordUnavailable { reason, .. } => {
                println!("\n{} {reason}", "❌ Couldn't get a word:".red().bold());
                match get_user_input("Try again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => continue,
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            SessionEvent::Rejected(e) => return Err(e.into()),
            SessionEvent::WordReady(_) | SessionEvent::StaleDiscarded(_) => {}
        }

        match play_round(session)? {
            Next::NewRound => {}
            Next::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Start a round and wait for its word behind a spinner
fn fetch_word(session: &mut Session) -> Result<SessionEvent> {
    session.start_new_round();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching a word from {}...", session.source_name()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let event = session.wait_for_word();
    spinner.finish_and_clear();
    Ok(event?)
}

fn play_round(session: &mut Session) -> Result<Next> {
    loop {
        print_round_state(session.state());

        let input = get_user_input("Guess a letter")?.to_lowercase();
        let letter = match input.as_str() {
            "quit" | "exit" => {
                if confirm_quit()? {
                    return Ok(Next::Quit);
                }
                continue;
            }
            "new" => {
                println!("\n🔄 Giving up on this one. New word coming up!\n");
                return Ok(Next::NewRound);
            }
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        println!("{}", "Type a single letter (or a command).".yellow());
                        continue;
                    }
                }
            }
        };

        let outcome = match session.guess_letter(letter) {
            Ok(outcome) => outcome,
            Err(GameError::InvalidLetter(c)) => {
                println!("{}", format!("{c:?} is not a letter.").yellow());
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        print_guess_outcome(letter, outcome);

        match outcome {
            GuessOutcome::CorrectAndWon => {
                print_win(session.state());
                return finish_round(session);
            }
            GuessOutcome::IncorrectAndLost => {
                let secret = session.state().reveal_secret()?;
                print_loss(session.state(), &secret);
                return finish_round(session);
            }
            _ => {}
        }
    }
}

fn finish_round(session: &Session) -> Result<Next> {
    print_tally(session.state().tally());

    match get_user_input("Play again? (yes/no)")?
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            println!("\n🔄 New game started!\n");
            Ok(Next::NewRound)
        }
        _ => Ok(Next::Quit),
    }
}

fn confirm_quit() -> Result<bool> {
    let answer = get_user_input("Are you sure you want to quit? (yes/no)")?;
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("input closed");
    }

    Ok(input.trim().to_string())
}
