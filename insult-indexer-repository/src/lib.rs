//! # Insult Indexer Repository
//!
//! This crate provides the document store abstraction used by the insult
//! indexer. It includes error definitions, the `DocumentStore` interface, a
//! Redis implementation (RedisJSON documents indexed by RediSearch), and an
//! in-memory store for tests and local runs.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod redisearch;
pub mod types;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use interfaces::DocumentStore;
pub use memory::InMemoryStore;
pub use redisearch::RedisStore;
pub use types::{FieldDefinition, FieldQuery, IndexDefinition, IndexInfo, IndexLookup};
