//! Game and fetch configuration

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroWordLength,
    #[error("at least one attempt is required")]
    ZeroAttempts,
    #[error("fetch timeout must be greater than zero")]
    ZeroTimeout,
    #[error("backoff must not exceed its cap ({initial:?} > {max:?})")]
    BackoffAboveCap { initial: Duration, max: Duration },
}

/// Shape of a game: how long the words are and how many guesses a player gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
}

impl GameConfig {
    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    pub const fn new(word_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Timeout and retry policy for fetching a secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    timeout: Duration,
    max_retries: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl FetchPolicy {
    /// # Errors
    /// Returns `ConfigError::ZeroTimeout` for a zero `timeout`, or
    /// `ConfigError::BackoffAboveCap` if `initial_backoff > max_backoff`.
    pub fn new(
        timeout: Duration,
        max_retries: u32,
        initial_backoff: Duration,
        max_backoff: Duration,
    ) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if initial_backoff > max_backoff {
            return Err(ConfigError::BackoffAboveCap {
                initial: initial_backoff,
                max: max_backoff,
            });
        }
        Ok(Self {
            timeout,
            max_retries,
            initial_backoff,
            max_backoff,
        })
    }

    /// Upper bound on a single attempt
    #[inline]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Attempts after the first one
    #[inline]
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    #[inline]
    #[must_use]
    pub const fn initial_backoff(&self) -> Duration {
        self.initial_backoff
    }

    #[inline]
    #[must_use]
    pub const fn max_backoff(&self) -> Duration {
        self.max_backoff
    }

    /// Delay before retry number `retry` (0-based), doubling up to the cap
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            max_retries: 3,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(2),
        }
    }
}
