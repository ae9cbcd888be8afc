//! Loader module for the insult indexer ingest.
//!
//! Pulls insults from the source and stores each one as a JSON document
//! under its ordinal key.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, field, info, instrument, warn, Span};

use crate::consumer::{FetchOutcome, InsultSource};
use crate::errors::IngestError;
use insult_indexer_repository::types::KEY_PREFIX;
use insult_indexer_repository::DocumentStore;
use insult_indexer_shared::IngestReport;

/// What to do when an ordinal fails on both the first attempt and the retry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run with `IngestError::FetchFailed`. Later ordinals are not
    /// attempted.
    #[default]
    Abort,
    /// Record the ordinal as failed and move on to the next one.
    Continue,
}

/// Configuration for the insult loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Time to wait before retrying a failed fetch.
    pub retry_delay: Duration,
    /// Log progress every this many ordinals. Zero disables progress logs.
    pub progress_interval: u64,
    pub failure_policy: FailurePolicy,
    /// Prefix of document keys; the ordinal is appended.
    pub key_prefix: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            retry_delay: Duration::from_secs(5),
            progress_interval: 8,
            failure_policy: FailurePolicy::Abort,
            key_prefix: KEY_PREFIX.to_string(),
        }
    }
}

/// Loader that stores fetched insults in the document store.
///
/// Each fetch is retried exactly once, after `retry_delay`, when the source
/// answers with a non-success status. Requests that cannot complete and store
/// errors are never retried.
pub struct InsultLoader {
    source: Arc<dyn InsultSource>,
    store: Arc<dyn DocumentStore>,
    config: LoaderConfig,
}

impl InsultLoader {
    /// Create a new loader with default configuration.
    pub fn new(source: Arc<dyn InsultSource>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            source,
            store,
            config: LoaderConfig::default(),
        }
    }

    /// Create a new loader with custom configuration.
    pub fn with_config(
        source: Arc<dyn InsultSource>,
        store: Arc<dyn DocumentStore>,
        config: LoaderConfig,
    ) -> Self {
        Self {
            source,
            store,
            config,
        }
    }

    /// Key of the document for a 1-based ordinal.
    pub fn document_key(&self, ordinal: u64) -> String {
        format!("{}{}", self.config.key_prefix, ordinal)
    }

    /// Fetch `desired_count` insults and store them at ordinals `1..=desired_count`.
    ///
    /// Existing documents in that key range are overwritten.
    ///
    /// # Returns
    ///
    /// * `Ok(IngestReport)` - Every ordinal was attempted; with
    ///   `FailurePolicy::Continue` the report lists ordinals that failed twice
    /// * `Err(IngestError::FetchFailed)` - An ordinal failed twice under
    ///   `FailurePolicy::Abort`
    /// * `Err(IngestError)` - A request could not complete, a body was not
    ///   JSON, or the store rejected a write
    #[instrument(skip(self), fields(run_id = field::Empty))]
    pub async fn ingest(&self, desired_count: u64) -> Result<IngestReport, IngestError> {
        let mut report = IngestReport::new(desired_count);
        Span::current().record("run_id", field::display(report.run_id));

        info!("Starting ingestion");

        for i in 0..desired_count {
            let ordinal = i + 1;

            if self.config.progress_interval > 0 && i % self.config.progress_interval == 0 {
                info!(ordinal = ordinal, "Processing and pushing to the store");
            }

            match self.fetch_with_retry(ordinal).await? {
                FetchOutcome::Success(body) => {
                    self.store_document(ordinal, &body).await?;
                    report.record_success(ordinal);
                }
                FetchOutcome::Failure { status } => match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        error!(
                            ordinal = ordinal,
                            status = status,
                            "Fetch failed after retry, aborting ingestion"
                        );
                        return Err(IngestError::FetchFailed { ordinal, status });
                    }
                    FailurePolicy::Continue => {
                        warn!(
                            ordinal = ordinal,
                            status = status,
                            "Fetch failed after retry, skipping ordinal"
                        );
                        report.record_failure(ordinal);
                    }
                },
            }
        }

        let report = report.finish();
        info!(
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "Ingestion completed"
        );
        Ok(report)
    }

    /// Fetch once, and once more after `retry_delay` if the first answer was
    /// not a success.
    async fn fetch_with_retry(&self, ordinal: u64) -> Result<FetchOutcome, IngestError> {
        let outcome = self.source.fetch().await?;

        let FetchOutcome::Failure { status } = outcome else {
            return Ok(outcome);
        };

        warn!(
            ordinal = ordinal,
            status = status,
            delay_ms = self.config.retry_delay.as_millis() as u64,
            "Fetch failed, retrying"
        );
        tokio::time::sleep(self.config.retry_delay).await;

        let retried = self.source.fetch().await?;
        if retried.is_success() {
            debug!(ordinal = ordinal, "Fetch succeeded after retry");
        }
        Ok(retried)
    }

    async fn store_document(&self, ordinal: u64, body: &str) -> Result<(), IngestError> {
        let document: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| IngestError::parse(format!("Ordinal {}: {}", ordinal, e)))?;

        let key = self.document_key(ordinal);
        self.store.set_document(&key, &document).await?;

        debug!(key = %key, "Stored insult");
        Ok(())
    }
}
