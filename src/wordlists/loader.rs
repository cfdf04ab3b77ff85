//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Entries are uppercase-normalized; anything that is not a playable word is
//! skipped.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and unplayable entries are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to a list of playable words
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                SecretWord::new(trimmed).ok().map(|word| word.text())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["lantern", "dragon-fly", "o'clock"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["LANTERN", "DRAGON-FLY", "O'CLOCK"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["lantern", "ice cream", "r2d2", "", "--", "walrus"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["LANTERN", "WALRUS"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert!(words.is_empty());
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "walrus").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Forget-Me-Not  ").unwrap();
        writeln!(file, "not a word").unwrap();
        file.flush().unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["WALRUS", "FORGET-ME-NOT"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
