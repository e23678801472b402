//! Guess validation against a dictionary

use super::ALLOWED;
use rustc_hash::FxHashSet;
use std::fmt;

/// Decides whether a submitted guess is a real word
pub trait Dictionary: Send + Sync + fmt::Debug {
    fn is_valid_word(&self, word: &str) -> bool;
}

/// Dictionary backed by a set of known words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build from any collection of words; entries are lowercased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The embedded list of allowed guesses
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(ALLOWED)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words with exactly `length` letters
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.words.iter().filter(|w| w.len() == length).count()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }
}

/// Accepts every word; for lengths no bundled list covers
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn is_valid_word(&self, _word: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_membership() {
        let dict = WordList::from_words(["crane", "Slate"]);
        assert!(dict.is_valid_word("crane"));
        assert!(dict.is_valid_word("slate"));
        assert!(dict.is_valid_word("SLATE"));
        assert!(!dict.is_valid_word("xyzzy"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn word_list_counts_by_length() {
        let dict = WordList::from_words(["crane", "planet", "plan", "slate"]);
        assert_eq!(dict.count_of_length(5), 2);
        assert_eq!(dict.count_of_length(6), 1);
        assert_eq!(dict.count_of_length(7), 0);
    }

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let dict = WordList::embedded();
        assert!(!dict.is_empty());
        for word in [
            "crane", "apple", "peach", "robot", "llama", "sassy", "algae", "words", "stare",
            "tears", "adieu", "roate", "raise", "audio", "plays", "quark",
        ] {
            assert!(dict.is_valid_word(word), "{word} missing from dictionary");
        }
        assert!(dict.len() > 4000);
        assert!(!dict.is_valid_word("qqqqq"));
    }

    #[test]
    fn accept_all_accepts_anything() {
        assert!(AcceptAll.is_valid_word("qqqqq"));
        assert!(AcceptAll.is_valid_word(""));
    }
}
