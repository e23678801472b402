//! Word list loading utilities
//!
//! Reads user-supplied word lists and normalizes embedded ones.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines, `#` comments and entries
/// containing anything other than ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use ntle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse a newline-separated word list
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let word = trimmed.to_ascii_lowercase();
            word.chars()
                .all(|c| c.is_ascii_lowercase())
                .then_some(word)
        })
        .collect()
}
