//! Secret word sources
//!
//! A [`WordSource`] produces a candidate secret of a requested length. The
//! remote source asks a random-word web service; the list source picks from a
//! local list. [`fetch_with_retry`] wraps either with a timeout and bounded
//! retries.

mod http;
mod list;
mod retry;

pub use http::{DEFAULT_BASE_URL, HttpWordSource};
pub use list::ListWordSource;
pub use retry::fetch_with_retry;

use crate::core::WordError;
use reqwest::StatusCode;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("word service returned no words")]
    EmptyResponse,
    #[error("word service returned '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("no {0}-letter words available")]
    NoWordOfLength(usize),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<WordSourceError>,
    },
}

impl WordSourceError {
    /// Whether another attempt could succeed
    ///
    /// A malformed word is one bad random draw. Client errors (4xx) other than
    /// 408 and 429 are permanent.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(error) => error.status().is_none_or(|status| {
                !status.is_client_error()
                    || status == StatusCode::REQUEST_TIMEOUT
                    || status == StatusCode::TOO_MANY_REQUESTS
            }),
            Self::EmptyResponse | Self::InvalidWord { .. } | Self::Timeout(_) => true,
            Self::NoWordOfLength(_) | Self::Exhausted { .. } => false,
        }
    }
}

/// Asynchronous provider of secret words
pub trait WordSource: Send + Sync {
    /// Fetch one lowercase word of exactly `length` letters
    fn fetch_secret_word(
        &self,
        length: usize,
    ) -> impl Future<Output = Result<String, WordSourceError>> + Send;
}

/// Source chosen on the command line
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Remote(HttpWordSource),
    Local(ListWordSource),
}

impl WordSource for ConfiguredSource {
    async fn fetch_secret_word(&self, length: usize) -> Result<String, WordSourceError> {
        match self {
            Self::Remote(source) => source.fetch_secret_word(length).await,
            Self::Local(source) => source.fetch_secret_word(length).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(WordSourceError::EmptyResponse.is_retryable());
        assert!(WordSourceError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!WordSourceError::NoWordOfLength(9).is_retryable());
        assert!(
            WordSourceError::InvalidWord {
                word: "well-being".into(),
                source: WordError::InvalidCharacters,
            }
            .is_retryable()
        );
    }

    #[tokio::test]
    async fn configured_local_source_dispatches() {
        let source = ConfiguredSource::Local(ListWordSource::from_words(["crane"]));
        assert_eq!(source.fetch_secret_word(5).await.unwrap(), "crane");
    }
}
