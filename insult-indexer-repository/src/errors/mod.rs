//! Error types for the insult indexer repository.

mod store_error;

pub use store_error::StoreError;
