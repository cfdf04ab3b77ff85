//! TUI application state and logic

use crate::core::{GameError, GuessOutcome, Phase};
use crate::session::{Session, SessionEvent};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info};

/// How long to wait for a key before checking on the word fetch
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Mode to return to when a quit confirmation is declined
    resume_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// The round just ended; asking whether to play again
    PlayAgain,
    ConfirmQuit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "Welcome! Guess the word before the gallows are finished.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            input_mode: InputMode::Playing,
            resume_mode: InputMode::Playing,
        }
    }

    /// Abandon whatever is on screen and fetch a new word
    pub fn new_round(&mut self) {
        let round = self.session.start_new_round();
        self.input_mode = InputMode::Playing;
        self.add_message(
            &format!("Fetching word {round} from {}...", self.session.source_name()),
            MessageStyle::Info,
        );
    }

    /// Apply finished word fetches
    pub fn pump(&mut self) {
        for event in self.session.pump() {
            match event {
                SessionEvent::WordReady(_) => {
                    let len = self.session.state().mask().len();
                    self.add_message(
                        &format!("Your word has {len} characters. Start guessing!"),
                        MessageStyle::Info,
                    );
                }
                SessionEvent::WordUnavailable { reason, .. } => {
                    self.add_message(&format!("No word: {reason}"), MessageStyle::Error);
                    self.add_message("Press 'r' to try again.", MessageStyle::Info);
                }
                SessionEvent::StaleDiscarded(round) => {
                    debug!(%round, "Ignored stale word");
                }
                SessionEvent::Rejected(e) => {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
            }
        }
    }

    /// Guess a letter from a key press
    pub fn guess(&mut self, letter: char) {
        // Letter keys are disabled until a word is in play
        if !self.session.state().accepts_guesses() {
            return;
        }

        let letter = letter.to_ascii_uppercase();
        match self.session.guess_letter(letter) {
            Ok(GuessOutcome::AlreadyGuessed) => {
                self.add_message(&format!("Already tried {letter}."), MessageStyle::Info);
            }
            Ok(GuessOutcome::Correct) => {
                self.add_message(&format!("{letter} is in the word!"), MessageStyle::Success);
            }
            Ok(GuessOutcome::Incorrect) => {
                let left = self.session.state().remaining_guesses();
                self.add_message(
                    &format!("No {letter}. {left} wrong guesses left."),
                    MessageStyle::Error,
                );
            }
            Ok(GuessOutcome::CorrectAndWon) => {
                self.add_message(
                    "🎉 You got it! I'll pick a harder one next time.",
                    MessageStyle::Success,
                );
                self.ask_play_again();
            }
            Ok(GuessOutcome::IncorrectAndLost) => {
                let secret = self
                    .session
                    .state()
                    .reveal_secret()
                    .unwrap_or_else(|_| "?".to_string());
                self.add_message(
                    &format!("💀 Hanged! The secret word was {secret}."),
                    MessageStyle::Error,
                );
                self.ask_play_again();
            }
            Err(GameError::InvalidLetter(_)) => {}
            Err(e) => {
                error!(error = %e, "Guess rejected");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// No round is being played, so `r` starts a new one
    fn can_restart(&self) -> bool {
        let phase = self.session.state().phase();
        matches!(phase, Phase::Idle | Phase::WordUnavailable) || phase.is_round_over()
    }

    fn ask_play_again(&mut self) {
        self.input_mode = InputMode::PlayAgain;
        self.add_message("Play again? (y/n)", MessageStyle::Info);
    }

    pub fn request_quit(&mut self) {
        if self.input_mode != InputMode::ConfirmQuit {
            self.resume_mode = self.input_mode;
            self.input_mode = InputMode::ConfirmQuit;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::ConfirmQuit => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                    self.should_quit = true;
                }
                _ => {
                    self.input_mode = self.resume_mode;
                }
            },
            InputMode::PlayAgain => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.new_round(),
                KeyCode::Char('n' | 'N') => {
                    self.input_mode = InputMode::Playing;
                    self.add_message("Press Tab or r whenever you want a new word.", MessageStyle::Info);
                }
                KeyCode::Esc | KeyCode::Char('q') => self.request_quit(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.request_quit(),
                KeyCode::Tab => self.new_round(),
                KeyCode::Char(c) if self.session.state().accepts_guesses() => self.guess(c),
                KeyCode::Char('r') if self.can_restart() => self.new_round(),
                KeyCode::Char('q') => self.request_quit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    info!("Starting hangman TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "TUI loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_round();

    loop {
        app.pump();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(tally = ?app.session.state().tally(), "Leaving hangman TUI");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tally;
    use crate::source::{OfflineWordSource, WordConstraints};
    use std::sync::Arc;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn code(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(runtime: &tokio::runtime::Runtime, word: &str) -> App {
        let source = Arc::new(OfflineWordSource::with_seed(vec![word.to_string()], 1));
        let session = Session::new(
            source,
            WordConstraints {
                min_length: 1,
                ..WordConstraints::default()
            },
            Duration::from_secs(1),
            runtime.handle().clone(),
        );
        let mut app = App::new(session);
        app.new_round();
        app.session.wait_for_word().unwrap();
        app
    }

    #[test]
    fn letters_ignored_while_awaiting_word() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let source = Arc::new(OfflineWordSource::with_seed(vec!["walrus".to_string()], 1));
        let session = Session::new(
            source,
            WordConstraints::default(),
            Duration::from_secs(1),
            runtime.handle().clone(),
        );
        let mut app = App::new(session);
        app.new_round();

        app.handle_key(key('w'));
        assert!(app.session.state().guessed_letters().is_empty());
    }

    #[test]
    fn winning_asks_to_play_again() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app_with(&runtime, "cat");

        for c in ['c', 'a', 't'] {
            app.handle_key(key(c));
        }
        assert_eq!(app.input_mode, InputMode::PlayAgain);
        assert_eq!(app.session.state().tally(), Tally { wins: 1, losses: 0 });

        app.handle_key(key('y'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.session.state().phase(), Phase::AwaitingWord);
    }

    #[test]
    fn losing_reveals_word() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app_with(&runtime, "cat");

        for c in ['b', 'd', 'e', 'f', 'g', 'h'] {
            app.handle_key(key(c));
        }
        assert_eq!(app.session.state().phase(), Phase::Lost);
        assert!(app.messages.iter().any(|m| m.text.contains("CAT")));

        app.handle_key(key('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.session.state().phase(), Phase::Lost);

        let round = app.session.state().round_id();
        app.handle_key(key('r'));
        assert!(app.session.state().round_id() > round);
        assert_eq!(app.session.state().phase(), Phase::AwaitingWord);
        assert_eq!(app.session.state().tally(), Tally { wins: 0, losses: 1 });
    }

    #[test]
    fn r_is_a_guess_during_play() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app_with(&runtime, "rat");
        let round = app.session.state().round_id();

        app.handle_key(key('r'));
        assert!(app.session.state().is_guessed('R'));
        assert_eq!(app.session.state().round_id(), round);
    }

    #[test]
    fn q_is_a_guess_during_play() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app_with(&runtime, "quiz");

        app.handle_key(key('q'));
        assert!(app.session.state().is_guessed('Q'));
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_needs_confirmation() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app_with(&runtime, "cat");

        app.handle_key(code(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::ConfirmQuit);

        app.handle_key(key('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(!app.should_quit);
        // The declining key is not taken as a guess
        assert!(!app.session.state().is_guessed('N'));

        app.handle_key(code(KeyCode::Esc));
        app.handle_key(key('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app_with(&runtime, "cat");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(!app.session.state().is_guessed('C'));
    }

    #[test]
    fn tab_abandons_round() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app_with(&runtime, "cat");
        let round = app.session.state().round_id();

        app.handle_key(code(KeyCode::Tab));
        assert!(app.session.state().round_id() > round);
        assert_eq!(app.session.state().tally(), Tally::default());
    }

    #[test]
    fn messages_are_capped() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app_with(&runtime, "cat");
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
