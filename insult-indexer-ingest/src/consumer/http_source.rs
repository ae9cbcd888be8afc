//! HTTP insult source backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use super::{FetchOutcome, InsultSource};
use crate::errors::IngestError;

/// Default insult API endpoint.
pub const DEFAULT_API_URL: &str = "https://evilinsult.com/generate_insult.php";

/// Configuration for the HTTP insult source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Endpoint URL, without query string.
    pub url: String,
    /// Value of the `lang` query parameter.
    pub language: String,
    /// Timeout for a whole request.
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            language: "en".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Fetches insults with `GET {url}?lang={language}&type=json`.
pub struct HttpInsultSource {
    client: Client,
    config: SourceConfig,
}

impl HttpInsultSource {
    /// Create a source with the given configuration.
    pub fn new(config: SourceConfig) -> Result<Self, IngestError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl InsultSource for HttpInsultSource {
    #[instrument(skip(self), fields(url = %self.config.url))]
    async fn fetch(&self) -> Result<FetchOutcome, IngestError> {
        let response = self
            .client
            .get(&self.config.url)
            .query(&[("lang", self.config.language.as_str()), ("type", "json")])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = %status, "Insult API returned non-success status");
            return Ok(FetchOutcome::Failure {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(FetchOutcome::Success(body))
    }
}
