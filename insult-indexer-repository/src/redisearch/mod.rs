//! Redis implementation of the document store.
//!
//! Documents are stored with RedisJSON (`JSON.SET`) and searched through a
//! RediSearch index (`FT.CREATE`, `FT.INFO`, `FT.SEARCH`). Requires Redis
//! Stack or Redis 8+.

mod client;
mod index_config;
mod queries;
mod reply;

pub use client::RedisStore;
pub use index_config::create_index_args;
pub use queries::{build_query_string, escape_query_text};
