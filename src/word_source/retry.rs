//! Timeout and retry around a word source

use super::{WordSource, WordSourceError};
use crate::config::FetchPolicy;

/// Fetch a secret word, bounding each attempt by `policy.timeout()`
///
/// Retryable failures are retried up to `policy.max_retries()` times with capped
/// exponential backoff. Non-retryable failures return at once.
///
/// # Errors
/// Returns the first non-retryable error, or `WordSourceError::Exhausted`
/// wrapping the last failure once retries run out.
pub async fn fetch_with_retry<S: WordSource>(
    source: &S,
    length: usize,
    policy: &FetchPolicy,
) -> Result<String, WordSourceError> {
    let mut retry = 0;
    loop {
        let error =
            match tokio::time::timeout(policy.timeout(), source.fetch_secret_word(length)).await {
                Ok(Ok(word)) => return Ok(word),
                Ok(Err(error)) => error,
                Err(_) => WordSourceError::Timeout(policy.timeout()),
            };

        if !error.is_retryable() {
            tracing::warn!(%error, "word source failed");
            return Err(error);
        }
        if retry >= policy.max_retries() {
            tracing::warn!(%error, attempts = retry + 1, "word source exhausted");
            return Err(WordSourceError::Exhausted {
                attempts: retry + 1,
                last: Box::new(error),
            });
        }

        let delay = policy.backoff(retry);
        tracing::warn!(%error, attempt = retry + 1, ?delay, "word fetch failed, retrying");
        tokio::time::sleep(delay).await;
        retry += 1;
    }
}
