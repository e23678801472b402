//! Offline source: random choice from a word list

use super::{WordSource, WordSourceError};
use crate::wordlists::{ANSWERS, loader};
use rand::seq::IndexedRandom;
use std::io;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ListWordSource {
    words: Arc<[String]>,
}

impl ListWordSource {
    /// Entries are lowercased; anything that is not ASCII letters is dropped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_lowercase())
                .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
                .collect(),
        }
    }

    /// The embedded answer list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(ANSWERS)
    }

    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_words(loader::load_from_file(path)?))
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

    fn choose(&self, length: usize) -> Option<String> {
        let candidates: Vec<&String> = self.words.iter().filter(|w| w.len() == length).collect();
        candidates.choose(&mut rand::rng()).map(|w| (*w).clone())
    }
}

impl WordSource for ListWordSource {
    async fn fetch_secret_word(&self, length: usize) -> Result<String, WordSourceError> {
        self.choose(length)
            .ok_or(WordSourceError::NoWordOfLength(length))
    }
}
