//! Interface definitions for the document store.
//!
//! This module defines the abstract `DocumentStore` trait that allows the
//! ingestion pipeline and query facade to run against Redis or a substitute.

mod document_store;

pub use document_store::DocumentStore;
