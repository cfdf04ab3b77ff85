//! TUI rendering with ratatui
//!
//! Gallows, masked word, letter board and round messages.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameState, Phase};
use crate::output::formatters::{gallows, lives_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(4), // Letter board
            Constraint::Length(3), // Prompt
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Gallows and word
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app.session.state(), main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_letters(f, app.session.state(), chunks[2]);
    render_prompt(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let figure_color = match state.phase() {
        Phase::Lost => Color::Red,
        Phase::Won => Color::Green,
        _ => Color::White,
    };

    let mut lines: Vec<Line> = gallows(state.wrong_guesses())
        .iter()
        .map(|row| Line::styled(*row, Style::default().fg(figure_color)))
        .collect();
    lines.push(Line::from(""));

    let word = match state.phase() {
        Phase::Idle => Span::styled("no round yet", Style::default().fg(Color::DarkGray)),
        Phase::AwaitingWord => Span::styled(
            "fetching a word...",
            Style::default().fg(Color::DarkGray),
        ),
        Phase::WordUnavailable => {
            Span::styled("no word available", Style::default().fg(Color::Red))
        }
        _ => Span::styled(
            state.current_display(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };
    lines.push(Line::from(word));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Lives: "),
        Span::styled(
            lives_bar(state.wrong_guesses()),
            Style::default().fg(Color::Red),
        ),
        Span::raw(format!(" {}", state.remaining_guesses())),
    ]));

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// A-Z, colored by whether each letter was guessed and whether it hit
fn render_letters(f: &mut Frame, state: &GameState, area: Rect) {
    let enabled = state.accepts_guesses();
    let revealed = state.mask().chars();

    let letter_span = |c: char| {
        let style = if !state.is_guessed(c) {
            if enabled {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else if revealed.contains(&c) {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT)
        };
        Span::styled(format!(" {c} "), style)
    };

    let rows: Vec<Line> = ['A'..='M', 'N'..='Z']
        .into_iter()
        .map(|range| Line::from(range.map(&letter_span).collect::<Vec<_>>()))
        .collect();

    let letters = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(letters, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let (text, color) = match app.input_mode {
        InputMode::ConfirmQuit => (
            "Are you sure you want to quit this super fun game? (y/n)",
            Color::Magenta,
        ),
        InputMode::PlayAgain if state.phase() == Phase::Won => {
            ("🎉 You win! Play again? (y/n)", Color::Green)
        }
        InputMode::PlayAgain => ("💀 You lose! Play again? (y/n)", Color::Red),
        InputMode::Playing => match state.phase() {
            Phase::Idle => ("r: start a round | Esc: quit", Color::Cyan),
            Phase::AwaitingWord => ("Hold on, picking a word...", Color::DarkGray),
            Phase::WordUnavailable => ("r: retry | Esc: quit", Color::Red),
            Phase::InProgress => ("Type a letter to guess | Tab: new word", Color::Yellow),
            Phase::Won | Phase::Lost => ("Tab/r: new word | q: quit", Color::Cyan),
        },
    };

    let prompt = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(prompt, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state = app.session.state();
    let tally = state.tally();

    let tally_text = format!("Total Wins: {} | Total Losses: {}", tally.wins, tally.losses);
    f.render_widget(
        Paragraph::new(tally_text).alignment(Alignment::Center),
        chunks[0],
    );

    let round_text = format!("Round {} ({})", state.round_id(), state.phase());
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[1],
    );

    let source_text = format!("Words: {} | Esc: Quit", app.session.source_name());
    f.render_widget(
        Paragraph::new(source_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
