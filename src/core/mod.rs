//! Core domain types for the game
//!
//! Pure and synchronous: words, per-letter feedback, the guess evaluator and
//! keyboard aggregation. Nothing here performs I/O.

mod evaluator;
mod feedback;
mod keyboard;
mod word;

pub use evaluator::{EvaluationError, evaluate};
pub use feedback::{GuessResult, GuessedLetter, LetterFeedback};
pub use keyboard::KeyboardFeedback;
pub use word::{Word, WordError};
