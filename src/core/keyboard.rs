//! Aggregated keyboard feedback
//!
//! Derived from the guess history on demand; a letter reports the best
//! feedback it has received in any guess.

use super::feedback::{GuessResult, LetterFeedback};
use rustc_hash::FxHashMap;

/// Best-known feedback per letter across a set of evaluated guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardFeedback {
    letters: FxHashMap<char, LetterFeedback>,
}

impl KeyboardFeedback {
    /// Aggregate feedback from `history`
    ///
    /// Precedence is `Correct > Present > Absent`, so a letter once marked
    /// `Correct` stays `Correct` whatever later guesses say about it.
    ///
    /// # Examples
    /// ```
    /// use ntle::core::{evaluate, KeyboardFeedback, LetterFeedback};
    ///
    /// let history = [evaluate("crane", "nacre").unwrap(), evaluate("crane", "crest").unwrap()];
    /// let keyboard = KeyboardFeedback::from_history(&history);
    /// assert_eq!(keyboard.get('c'), LetterFeedback::Correct);
    /// assert_eq!(keyboard.get('t'), LetterFeedback::Absent);
    /// assert_eq!(keyboard.get('z'), LetterFeedback::Empty);
    /// ```
    #[must_use]
    pub fn from_history(history: &[GuessResult]) -> Self {
        let mut letters: FxHashMap<char, LetterFeedback> = FxHashMap::default();
        for letter in history.iter().flatten() {
            let best = letters.entry(letter.character()).or_default();
            *best = (*best).max(letter.feedback());
        }
        Self { letters }
    }

    /// Feedback for `letter`, `Empty` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> LetterFeedback {
        self.letters.get(&letter).copied().unwrap_or_default()
    }

    /// Letters with the given feedback, sorted
    #[must_use]
    pub fn letters_with(&self, feedback: LetterFeedback) -> Vec<char> {
        let mut letters: Vec<char> = self
            .letters
            .iter()
            .filter(|&(_, &f)| f == feedback)
            .map(|(&c, _)| c)
            .collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
