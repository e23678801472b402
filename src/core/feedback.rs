//! Per-letter feedback for an evaluated guess

use std::fmt;

/// Feedback for a single square
///
/// The derived ordering is the precedence used when aggregating feedback for
/// the keyboard: `Empty < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterFeedback {
    /// Placeholder square, not guessed yet
    #[default]
    Empty,
    /// Letter is not in the secret (or every occurrence is already accounted for)
    Absent,
    /// Letter is in the secret at another position
    Present,
    /// Letter is at exactly this position
    Correct,
}

impl LetterFeedback {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }
}

/// A guessed letter together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessedLetter {
    character: char,
    feedback: LetterFeedback,
}

impl GuessedLetter {
    pub(crate) const fn new(character: char, feedback: LetterFeedback) -> Self {
        Self {
            character,
            feedback,
        }
    }

    #[inline]
    #[must_use]
    pub const fn character(self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn feedback(self) -> LetterFeedback {
        self.feedback
    }
}

/// One completed, evaluated guess
///
/// Only produced by [`evaluate`](crate::core::evaluate), so its length always
/// matches the secret it was evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    letters: Vec<GuessedLetter>,
}

impl GuessResult {
    pub(crate) const fn new(letters: Vec<GuessedLetter>) -> Self {
        Self { letters }
    }

    #[must_use]
    pub fn letters(&self) -> &[GuessedLetter] {
        &self.letters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GuessedLetter> {
        self.letters.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.character).collect()
    }

    /// Every letter is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.letters.is_empty()
            && self
                .letters
                .iter()
                .all(|l| l.feedback == LetterFeedback::Correct)
    }

    #[must_use]
    pub fn count(&self, feedback: LetterFeedback) -> usize {
        self.letters.iter().filter(|l| l.feedback == feedback).count()
    }

    /// Feedback as a row of emoji squares
    ///
    /// # Examples
    /// ```
    /// use ntle::core::evaluate;
    ///
    /// let result = evaluate("slate", "crane").unwrap();
    /// assert_eq!(result.to_emoji(), "⬛⬛🟩⬛🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.feedback.emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a GuessedLetter;
    type IntoIter = std::slice::Iter<'a, GuessedLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Correct, Empty, Present};

    fn result(word: &str, feedback: &[LetterFeedback]) -> GuessResult {
        GuessResult::new(
            word.chars()
                .zip(feedback)
                .map(|(c, &f)| GuessedLetter::new(c, f))
                .collect(),
        )
    }

    #[test]
    fn feedback_precedence_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(Absent > Empty);
        assert_eq!([Absent, Correct, Present].iter().max(), Some(&Correct));
    }

    #[test]
    fn win_requires_all_correct() {
        assert!(result("crane", &[Correct; 5]).is_win());
        assert!(!result("crane", &[Correct, Correct, Present, Correct, Correct]).is_win());
        assert!(!GuessResult::new(Vec::new()).is_win());
    }

    #[test]
    fn word_and_counts() {
        let r = result("peach", &[Present, Present, Present, Absent, Absent]);
        assert_eq!(r.word(), "peach");
        assert_eq!(r.count(Present), 3);
        assert_eq!(r.count(Absent), 2);
        assert_eq!(r.count(Correct), 0);
    }

    #[test]
    fn emoji_row() {
        let r = result("sassy", &[Absent, Correct, Correct, Correct, Present]);
        assert_eq!(r.to_emoji(), "⬛🟩🟩🟩🟨");
        assert_eq!(Empty.emoji(), '⬜');
    }
}
