//! Remote random-word service
//!
//! `GET {base_url}/word?length={n}` answers with a JSON array of words.

use super::{WordSource, WordSourceError};
use crate::core::Word;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://random-word-api.herokuapp.com";

const USER_AGENT: &str = concat!("ntle/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWordSource {
    /// # Errors
    /// Returns `WordSourceError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WordSourceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl WordSource for HttpWordSource {
    async fn fetch_secret_word(&self, length: usize) -> Result<String, WordSourceError> {
        let url = format!("{}/word", self.base_url);
        tracing::debug!(%url, length, "requesting secret word");

        let words: Vec<String> = self
            .client
            .get(&url)
            .query(&[("length", length)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_response(words, length)
    }
}

/// Take the first word of a service response and check it fits the game
fn parse_response(words: Vec<String>, length: usize) -> Result<String, WordSourceError> {
    let word = words
        .into_iter()
        .next()
        .ok_or(WordSourceError::EmptyResponse)?;
    match Word::new(word.as_str(), length) {
        Ok(valid) => Ok(valid.text().to_string()),
        Err(source) => Err(WordSourceError::InvalidWord { word, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and hand back the request line
    async fn serve_once(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap();
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn parse_takes_first_word() {
        let words = vec!["Crane".to_string(), "slate".to_string()];
        assert_eq!(parse_response(words, 5).unwrap(), "crane");
    }

    #[test]
    fn parse_rejects_empty_and_invalid() {
        assert!(matches!(
            parse_response(vec![], 5),
            Err(WordSourceError::EmptyResponse)
        ));
        assert!(matches!(
            parse_response(vec!["planet".into()], 5),
            Err(WordSourceError::InvalidWord {
                source: WordError::InvalidLength { expected: 5, actual: 6 },
                ..
            })
        ));
    }

    #[tokio::test]
    async fn fetches_word_from_service() {
        let (base_url, server) = serve_once("200 OK", r#"["robot"]"#).await;
        let source = HttpWordSource::new(format!("{base_url}/"), Duration::from_secs(5)).unwrap();
        assert_eq!(source.base_url(), base_url);

        let word = source.fetch_secret_word(5).await.unwrap();
        assert_eq!(word, "robot");

        let request_line = server.await.unwrap();
        assert_eq!(request_line, "GET /word?length=5 HTTP/1.1");
    }

    #[tokio::test]
    async fn server_error_is_retryable() {
        let (base_url, server) = serve_once("503 Service Unavailable", "[]").await;
        let source = HttpWordSource::new(base_url, Duration::from_secs(5)).unwrap();

        let err = source.fetch_secret_word(5).await.unwrap_err();
        assert!(matches!(err, WordSourceError::Http(_)));
        assert!(err.is_retryable());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_word_is_retryable() {
        let (base_url, server) = serve_once("200 OK", r#"["x-ray"]"#).await;
        let source = HttpWordSource::new(base_url, Duration::from_secs(5)).unwrap();

        let err = source.fetch_secret_word(5).await.unwrap_err();
        assert!(matches!(
            err,
            WordSourceError::InvalidWord {
                source: WordError::InvalidCharacters,
                ..
            }
        ));
        assert!(err.is_retryable());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn client_error_is_not_retryable() {
        let (base_url, server) = serve_once("404 Not Found", "[]").await;
        let source = HttpWordSource::new(base_url, Duration::from_secs(5)).unwrap();

        let err = source.fetch_secret_word(5).await.unwrap_err();
        assert!(matches!(err, WordSourceError::Http(_)));
        assert!(!err.is_retryable());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn rate_limit_is_retryable() {
        let (base_url, server) = serve_once("429 Too Many Requests", "[]").await;
        let source = HttpWordSource::new(base_url, Duration::from_secs(5)).unwrap();

        let err = source.fetch_secret_word(5).await.unwrap_err();
        assert!(err.is_retryable());
        server.await.unwrap();
    }
}
