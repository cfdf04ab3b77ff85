//! Tracing setup
//!
//! The filter comes from `RUST_LOG` when set. The TUI owns the terminal, so
//! it always logs to a file; line mode logs warnings to stderr unless a file
//! is given.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Log file used by the TUI when none is given
pub const DEFAULT_LOG_FILE: &str = "hangman.log";

/// Install the global subscriber
///
/// A second call is a no-op, so tests and embedders can call it freely.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
