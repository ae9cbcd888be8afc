//! Error types for the insult indexer ingest.

use insult_indexer_repository::StoreError;
use thiserror::Error;

/// Errors that can occur in the insult indexer ingest.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The HTTP request could not be completed (timeout, DNS, refused connection).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The source answered with a non-success status on the first attempt and
    /// on the retry.
    #[error("Fetch for ordinal {ordinal} failed with status {status} after retry")]
    FetchFailed { ordinal: u64, status: u16 },

    /// The response body was not valid JSON.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error from the document store.
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

impl IngestError {
    /// Create an HTTP error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
