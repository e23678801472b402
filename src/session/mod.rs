//! Game session state
//!
//! A [`GameSession`] owns one secret word, the pending guess buffer and the
//! history of evaluated guesses. It moves through
//! `AwaitingSecretWord -> InProgress -> (Won | Lost)`; the last two are terminal
//! and reject further submissions.

mod stats;

pub use stats::Statistics;

use crate::config::GameConfig;
use crate::core::{EvaluationError, GuessResult, KeyboardFeedback, Word, WordError, evaluate};
use crate::wordlists::Dictionary;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// The word source has not delivered a secret yet
    AwaitingSecretWord,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a submission was rejected; the session is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no game in progress ({0:?})")]
    NotInProgress(SessionState),
    #[error("not enough letters: {actual} of {expected}")]
    IncompleteGuess { expected: usize, actual: usize },
    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretWordError {
    #[error("the secret word is already set")]
    AlreadySet,
    #[error("invalid secret word: {0}")]
    Invalid(#[from] WordError),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    dictionary: Arc<dyn Dictionary>,
    secret_word: Option<Word>,
    history: Vec<GuessResult>,
    pending_guess: String,
    state: SessionState,
}

impl GameSession {
    /// A new session waiting for its secret word
    #[must_use]
    pub fn new(config: GameConfig, dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            config,
            dictionary,
            secret_word: None,
            history: Vec::with_capacity(config.max_attempts()),
            pending_guess: String::with_capacity(config.word_length()),
            state: SessionState::AwaitingSecretWord,
        }
    }

    /// Install the secret word, starting the game
    ///
    /// # Errors
    /// Returns `SecretWordError::AlreadySet` if the session already has a secret,
    /// or `SecretWordError::Invalid` if `word` is not a word of the configured
    /// length. The session is unchanged on error.
    pub fn set_secret_word(&mut self, word: &str) -> Result<(), SecretWordError> {
        if self.state != SessionState::AwaitingSecretWord {
            return Err(SecretWordError::AlreadySet);
        }
        let word = Word::new(word, self.config.word_length())?;
        tracing::debug!(length = word.len(), "secret word resolved");
        self.secret_word = Some(word);
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// Append a letter to the pending guess
    ///
    /// Returns whether the letter was taken: only `a..=z`, only while the game is
    /// in progress, and only until the guess is full.
    pub fn append_char(&mut self, c: char) -> bool {
        if self.state != SessionState::InProgress
            || self.pending_guess.len() >= self.config.word_length()
            || !c.is_ascii_lowercase()
        {
            return false;
        }
        self.pending_guess.push(c);
        true
    }

    /// Remove the last pending letter, if any
    pub fn delete_char(&mut self) -> bool {
        self.pending_guess.pop().is_some()
    }

    /// Evaluate the pending guess and append it to the history
    ///
    /// # Errors
    /// Returns `SubmitError` when the game is not in progress, the guess is
    /// short, or the dictionary rejects it. The secret word itself always
    /// passes the dictionary. Nothing changes on error.
    pub fn submit_guess(&mut self) -> Result<&GuessResult, SubmitError> {
        let Some(secret) = self
            .secret_word
            .as_ref()
            .filter(|_| self.state == SessionState::InProgress)
        else {
            return Err(SubmitError::NotInProgress(self.state));
        };

        if self.pending_guess.len() != self.config.word_length() {
            return Err(SubmitError::IncompleteGuess {
                expected: self.config.word_length(),
                actual: self.pending_guess.len(),
            });
        }

        // The secret is always guessable, in the dictionary or not
        if self.pending_guess != secret.text()
            && !self.dictionary.is_valid_word(&self.pending_guess)
        {
            tracing::debug!(guess = %self.pending_guess, "guess rejected by dictionary");
            return Err(SubmitError::NotInDictionary(self.pending_guess.clone()));
        }

        let result = evaluate(secret.text(), &self.pending_guess)?;
        let won = result.is_win();
        self.history.push(result);
        self.pending_guess.clear();

        if won {
            self.state = SessionState::Won;
        } else if self.history.len() >= self.config.max_attempts() {
            self.state = SessionState::Lost;
        }
        tracing::info!(
            attempt = self.history.len(),
            state = ?self.state,
            "guess accepted"
        );

        Ok(&self.history[self.history.len() - 1])
    }

    /// Best-known feedback per letter across the history
    #[must_use]
    pub fn keyboard_feedback(&self) -> KeyboardFeedback {
        KeyboardFeedback::from_history(&self.history)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[must_use]
    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    /// The secret word, once the word source has resolved
    #[must_use]
    pub const fn secret_word(&self) -> Option<&Word> {
        self.secret_word.as_ref()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts() - self.history.len()
    }
}
