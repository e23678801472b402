//! Guess evaluation
//!
//! Assigns a [`LetterFeedback`] to every letter of a guess with duplicate
//! letters accounted for: a letter guessed more often than it remains in the
//! secret is `Present` only for as many occurrences as remain, leftmost first.

use super::feedback::{GuessResult, GuessedLetter, LetterFeedback};
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("guess has {guess} letters but the secret has {secret}")]
    LengthMismatch { secret: usize, guess: usize },
}

/// Evaluate `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: every exact position match is `Correct` and is removed from
///    the secret's letter pool
/// 2. Second pass, left to right: each remaining guess letter is `Present`
///    while the pool still holds an unmatched occurrence of it, else `Absent`
///
/// # Errors
/// Returns `EvaluationError::LengthMismatch` if the two words differ in length.
///
/// # Examples
/// ```
/// use ntle::core::{evaluate, LetterFeedback::*};
///
/// let result = evaluate("algae", "aabbb").unwrap();
/// let feedback: Vec<_> = result.iter().map(|l| l.feedback()).collect();
/// assert_eq!(feedback, [Correct, Present, Absent, Absent, Absent]);
///
/// assert!(evaluate("crane", "cranes").is_err());
/// ```
pub fn evaluate(secret: &str, guess: &str) -> Result<GuessResult, EvaluationError> {
    let secret: Vec<char> = secret.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    if secret.len() != guess.len() {
        return Err(EvaluationError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let exact: Vec<bool> = guess.iter().zip(&secret).map(|(g, s)| g == s).collect();

    // Secret letters not consumed by an exact match
    let mut pool: FxHashMap<char, usize> = FxHashMap::default();
    for (&letter, _) in secret.iter().zip(&exact).filter(|&(_, &hit)| !hit) {
        *pool.entry(letter).or_insert(0) += 1;
    }

    let letters = guess
        .iter()
        .zip(&exact)
        .map(|(&letter, &hit)| {
            let feedback = if hit {
                LetterFeedback::Correct
            } else {
                match pool.get_mut(&letter) {
                    Some(remaining) if *remaining > 0 => {
                        *remaining -= 1;
                        LetterFeedback::Present
                    }
                    _ => LetterFeedback::Absent,
                }
            };
            GuessedLetter::new(letter, feedback)
        })
        .collect();

    Ok(GuessResult::new(letters))
}
