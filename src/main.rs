//! Hangman - CLI
//!
//! Hangman with TUI and line modes. Words come from the Wordnik API when an
//! API key is configured, otherwise from the embedded offline list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hangman::{
    commands::{fetch_word, run_simple},
    config::{GameConfig, SourceChoice},
    interactive::{App, run_tui},
    logging,
    session::Session,
    source::WordConstraints,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows are finished",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: auto (default), wordnik, offline, or path to a word list file
    #[arg(short, long, global = true, default_value = "auto")]
    source: String,

    /// Wordnik API key
    #[arg(long, global = true, env = "WORDNIK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Shortest word to play
    #[arg(long, global = true, default_value = "5")]
    min_length: usize,

    /// Longest word to play
    #[arg(long, global = true, default_value = "15")]
    max_length: usize,

    /// Minimum corpus frequency (wordnik only)
    #[arg(long, global = true, default_value = "0")]
    min_corpus_count: u32,

    /// Allow words without a dictionary definition (wordnik only)
    #[arg(long, global = true)]
    no_dictionary_def: bool,

    /// Seconds to wait for a word before giving up
    #[arg(long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// Seed for offline word picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI defaults to hangman.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Fetch one word from the source and show it with its mask
    Word,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            source: SourceChoice::from_name(&self.source),
            api_key: self.api_key.clone(),
            constraints: WordConstraints {
                min_length: self.min_length,
                max_length: self.max_length,
                min_corpus_count: self.min_corpus_count,
                has_dictionary_def: !self.no_dictionary_def,
                ..WordConstraints::default()
            },
            timeout: Duration::from_secs(self.timeout_secs),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let log_file = match (command, &cli.log_file) {
        (_, Some(path)) => Some(path.clone()),
        (Commands::Play, None) => Some(PathBuf::from(logging::DEFAULT_LOG_FILE)),
        _ => None,
    };
    logging::init(log_file.as_deref())?;

    let config = cli.game_config();
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;

    match command {
        Commands::Play => {
            let session = new_session(&config, &runtime)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = new_session(&config, &runtime)?;
            run_simple(&mut session)
        }
        Commands::Word => run_word_command(&config, &runtime),
    }
}

fn new_session(config: &GameConfig, runtime: &tokio::runtime::Runtime) -> Result<Session> {
    let source = config.build_source()?;
    Ok(Session::new(
        source,
        config.constraints.clone(),
        config.timeout,
        runtime.handle().clone(),
    ))
}

fn run_word_command(config: &GameConfig, runtime: &tokio::runtime::Runtime) -> Result<()> {
    let source = config.build_source()?;
    let fetched = runtime.block_on(fetch_word(
        source.as_ref(),
        &config.constraints,
        config.timeout,
    ))?;

    println!("Source: {}", source.name());
    println!("Word:   {}", fetched.word.bright_yellow().bold());
    println!("Masked: {}", fetched.masked);
    Ok(())
}
