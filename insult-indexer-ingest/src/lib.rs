//! # Insult Indexer Ingest
//!
//! This crate provides the components that pull insults from the insult API
//! into the document store and query them back.
//!
//! ## Architecture
//!
//! 1. **Consumer**: Fetches insult documents from the HTTP API
//! 2. **Loader**: Stores each document under its ordinal key, retrying a
//!    failed fetch once
//! 3. **Facade**: Creates the search index on first use and runs the
//!    standard queries

pub mod consumer;
pub mod errors;
pub mod facade;
pub mod loader;

pub use consumer::{FetchOutcome, HttpInsultSource, InsultSource};
pub use errors::IngestError;
pub use facade::{IndexFacade, IndexStatus, StandardQueryResults};
pub use loader::{FailurePolicy, InsultLoader, LoaderConfig};
