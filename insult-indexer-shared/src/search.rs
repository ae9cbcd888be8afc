//! Search result types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::InsultRecord;

/// A single document returned by a search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The store key the document lives under (e.g. `insult:3`).
    pub key: String,
    /// The stored JSON document.
    pub document: Value,
}

impl SearchHit {
    pub fn new(key: impl Into<String>, document: Value) -> Self {
        Self {
            key: key.into(),
            document,
        }
    }

    /// Typed view of the stored document.
    pub fn record(&self) -> InsultRecord {
        InsultRecord::from_document(&self.document)
    }
}

/// The result set of one search query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Number of matches reported by the search engine.
    pub total: u64,
    /// Documents returned for this query.
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    /// An empty result set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Keys of the returned documents, in result order.
    pub fn keys(&self) -> Vec<&str> {
        self.hits.iter().map(|hit| hit.key.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_response() {
        let response = SearchResponse::empty();
        assert!(response.is_empty());
        assert_eq!(response.total, 0);
        assert!(response.keys().is_empty());
    }

    #[test]
    fn test_hit_record() {
        let hit = SearchHit::new("insult:1", json!({"insult": "mom joke", "language": "en"}));
        let record = hit.record();

        assert_eq!(record.insult.as_deref(), Some("mom joke"));
        assert_eq!(record.language.as_deref(), Some("en"));
    }
}
