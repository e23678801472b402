//! Validated guess and secret words
//!
//! A `Word` is a lowercase ASCII word whose length was checked against the
//! length the game is configured for.

use std::fmt;
use thiserror::Error;

/// A lowercase ASCII word of a known length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of `length` letters
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use ntle::core::Word;
    ///
    /// let word = Word::new("Crane", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("crane", 6).is_err());
    /// assert!(Word::new("cr4ne", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE", 5).unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE", 5).unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_surrounding_whitespace_trimmed() {
        assert_eq!(Word::new(" crane\n", 5).unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert_eq!(
            Word::new("shrt", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(matches!(
            Word::new("", 5),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_other_lengths() {
        assert!(Word::new("plane", 5).is_ok());
        assert!(Word::new("planet", 6).is_ok());
        assert!(Word::new("plan", 4).is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané", 5), Err(WordError::NonAscii));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
