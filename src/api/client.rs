//! HTTP client for the trivia API.

use super::schema::{CategoryRecord, RandomClue};
use super::source::TriviaSource;
use crate::config::TriviaConfig;
use crate::error::TriviaError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Trivia API client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTriviaClient {
    /// Base URL without trailing slash.
    base_url: String,
    /// HTTP client.
    client: reqwest::Client,
}

impl HttpTriviaClient {
    /// Creates a client for `base_url` with the given request timeout.
    #[instrument(skip(timeout))]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TriviaError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        info!(base_url = %base_url, ?timeout, "Creating trivia API client");
        Ok(Self { base_url, client })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &TriviaConfig) -> Result<Self, TriviaError> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, TriviaError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending GET request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TriviaError::network(format!("GET {} returned HTTP {}", url, status)));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| TriviaError::malformed(format!("GET {} returned unexpected JSON: {}", url, e)))
    }
}

#[async_trait]
impl TriviaSource for HttpTriviaClient {
    #[instrument(skip(self))]
    async fn random_category_id(&self) -> Result<u64, TriviaError> {
        let clues: Vec<RandomClue> = self.get_json("/api/random").await?;
        let first = clues
            .into_iter()
            .next()
            .ok_or_else(|| TriviaError::malformed("/api/random returned an empty list"))?;
        debug!(category_id = first.category.id, "Got random category");
        Ok(first.category.id)
    }

    #[instrument(skip(self))]
    async fn category(&self, id: u64) -> Result<CategoryRecord, TriviaError> {
        let record: CategoryRecord = self
            .get_json(&format!("/api/category?id={}", id))
            .await?;
        debug!(title = %record.title, clue_count = record.clues.len(), "Got category");
        Ok(record)
    }
}
