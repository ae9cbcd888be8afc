//! Document store trait definition.
//!
//! This module defines the abstract interface for JSON document storage and
//! search, allowing different backend implementations (Redis, in-memory, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;
use crate::types::{FieldQuery, IndexDefinition, IndexLookup};
use insult_indexer_shared::SearchResponse;

/// Abstract interface for document store operations.
///
/// This trait defines all the operations the insult indexer needs from a
/// store capable of holding JSON documents and answering field queries over
/// them. Implementations are passed around as `Arc<dyn DocumentStore>` so the
/// ingestion pipeline and query facade can be tested against a substitute.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, StoreError>` for consistent error handling.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a whole JSON document at `key`.
    ///
    /// Any existing document at the same key is replaced entirely; there is
    /// no field-level merge.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was written
    /// * `Err(StoreError)` - If the write fails
    async fn set_document(&self, key: &str, document: &Value) -> Result<(), StoreError>;

    /// Probe for an index by name.
    ///
    /// This method does not fail: an error during the probe is reported as
    /// `IndexLookup::TransientError` so callers can tell it apart from a
    /// missing index.
    async fn index_info(&self, index: &str) -> IndexLookup;

    /// Create a search index from a definition.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was created
    /// * `Err(StoreError::IndexCreationError)` - If creation fails (including
    ///   when an index with the same name already exists)
    async fn create_index(&self, definition: &IndexDefinition) -> Result<(), StoreError>;

    /// Run a field query against an index.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchResponse)` - Matching documents; empty when nothing matches
    /// * `Err(StoreError)` - If the index does not exist or the query fails
    async fn search(&self, index: &str, query: &FieldQuery) -> Result<SearchResponse, StoreError>;

    /// Remove every key and index from the store.
    async fn flush_all(&self) -> Result<(), StoreError>;

    /// Check if the store is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the store answered
    /// * `Ok(false)` - If the store answered unexpectedly
    /// * `Err(StoreError)` - If the check could not be executed
    async fn health_check(&self) -> Result<bool, StoreError>;
}
