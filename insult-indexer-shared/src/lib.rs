//! # Insult Indexer Shared
//!
//! Types shared by the repository, ingest, and binary crates: the insult
//! document model, search results, and the ingestion run report.

mod document;
mod report;
mod search;

pub use document::{InsultRecord, INSULT_FIELDS};
pub use report::IngestReport;
pub use search::{SearchHit, SearchResponse};
