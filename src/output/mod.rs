//! Terminal output formatting
//!
//! Drawing helpers shared by both frontends and colored printing for line mode.

pub mod display;
pub mod formatters;

pub use display::{print_guess_outcome, print_loss, print_round_state, print_tally, print_win};
