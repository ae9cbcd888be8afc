//! Consumer module for the insult indexer ingest.
//!
//! Fetches insult documents from the insult API.

mod http_source;
mod messages;

use async_trait::async_trait;

use crate::errors::IngestError;

pub use http_source::{HttpInsultSource, SourceConfig, DEFAULT_API_URL};
pub use messages::FetchOutcome;

/// A source of insult documents, one per call.
///
/// A non-success answer is an `Ok(FetchOutcome::Failure)` so the caller can
/// decide to retry. `Err` is reserved for requests that could not complete
/// at all.
#[async_trait]
pub trait InsultSource: Send + Sync {
    async fn fetch(&self) -> Result<FetchOutcome, IngestError>;
}
