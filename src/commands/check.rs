//! One-off evaluation of a guess against a secret

use super::CommandError;
use crate::core::{GuessResult, Word, evaluate};
use crate::output::print_check_result;
use std::io::Write;

/// Evaluate `guess` against `secret` and print the feedback
///
/// Both words are trimmed and lowercased first.
///
/// # Errors
/// Returns `CommandError::Word` if either word has anything but letters,
/// `CommandError::Evaluation` if their lengths differ, or an I/O error.
pub fn run_check<W: Write>(
    secret: &str,
    guess: &str,
    out: &mut W,
) -> Result<GuessResult, CommandError> {
    let secret = Word::new(secret, secret.trim().len())?;
    let guess = Word::new(guess, guess.trim().len())?;

    let result = evaluate(secret.text(), guess.text())?;
    tracing::debug!(guess = guess.text(), feedback = %result.to_emoji(), "evaluated");

    print_check_result(out, &result)?;
    Ok(result)
}
