//! Command implementations

pub mod simple;
pub mod word;

pub use simple::run_simple;
pub use word::{FetchedWord, fetch_word};
