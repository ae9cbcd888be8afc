//! # Insult Indexer
//!
//! Main library for the insult indexer binary.
//!
//! This crate provides configuration, dependency wiring, and result output
//! for a single indexer run: ensure the index, ingest, query.

pub mod config;
pub mod display;

pub use config::{Dependencies, Settings};

use insult_indexer_ingest::IngestError;
use insult_indexer_repository::StoreError;
use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] IngestError),

    /// Store error.
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
