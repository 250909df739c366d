use std::time::Duration;

use crate::config::Config;
use crate::generator::WordSource;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[cfg(feature = "network")]
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("word service answered with HTTP {0}")]
    Status(u16),
    #[error("response was not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("word service returned no words")]
    Empty,
    #[error("built without network support")]
    NetworkDisabled,
}

/// Word source backed by an HTTP endpoint that answers with a JSON array of
/// words, such as `https://random-word-api.herokuapp.com/word?number=10`.
#[derive(Clone, Debug)]
pub struct RemoteWordSource {
    url: String,
    timeout: Duration,
}

impl RemoteWordSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.request_url(), config.fetch_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WordSource for RemoteWordSource {
    fn fetch_words(&self) -> Result<Vec<String>, FetchError> {
        let body = fetch_url(&self.url, self.timeout)?;
        parse_words(&body)
    }
}

pub fn parse_words(body: &str) -> Result<Vec<String>, FetchError> {
    let words: Vec<String> = serde_json::from_str(body)?;
    if words.iter().all(|w| w.trim().is_empty()) {
        return Err(FetchError::Empty);
    }
    Ok(words)
}

#[cfg(feature = "network")]
fn fetch_url(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send().map_err(|err| {
        if err.is_timeout() {
            FetchError::Timeout(timeout)
        } else {
            FetchError::Request(err)
        }
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(response.text()?)
}

#[cfg(not(feature = "network"))]
fn fetch_url(_url: &str, _timeout: Duration) -> Result<String, FetchError> {
    Err(FetchError::NetworkDisabled)
}
