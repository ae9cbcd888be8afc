//! In-memory document store.
//!
//! A `DocumentStore` that keeps documents and index definitions in process
//! memory. It follows the Redis behavior the indexer relies on: whole-document
//! writes, prefix-scoped indexes, `FLUSHALL` dropping indexes too, and an
//! error when searching an index that does not exist. Used by tests and for
//! dry runs without a Redis server.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::errors::StoreError;
use crate::interfaces::DocumentStore;
use crate::types::{FieldQuery, IndexDefinition, IndexInfo, IndexLookup};
use insult_indexer_shared::{SearchHit, SearchResponse};

/// Documents returned per query, matching the `FT.SEARCH` default.
const DEFAULT_RESULT_LIMIT: usize = 10;

#[derive(Debug, Default)]
struct State {
    documents: BTreeMap<String, Value>,
    indexes: BTreeMap<String, IndexDefinition>,
    flush_count: usize,
    index_create_count: usize,
}

/// In-memory implementation of `DocumentStore`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document stored at `key`, if any.
    pub async fn document(&self, key: &str) -> Option<Value> {
        self.state.lock().await.documents.get(key).cloned()
    }

    /// All stored keys, in ordinal order.
    pub async fn keys(&self) -> Vec<String> {
        let state = self.state.lock().await;
        let mut keys: Vec<String> = state.documents.keys().cloned().collect();
        keys.sort_by(|a, b| natural_key_order(a, b));
        keys
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.state.lock().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// The definition of an existing index.
    pub async fn index_definition(&self, index: &str) -> Option<IndexDefinition> {
        self.state.lock().await.indexes.get(index).cloned()
    }

    /// How many times `flush_all` ran.
    pub async fn flush_count(&self) -> usize {
        self.state.lock().await.flush_count
    }

    /// How many indexes were created successfully.
    pub async fn index_create_count(&self) -> usize {
        self.state.lock().await.index_create_count
    }
}

/// Orders `insult:2` before `insult:10`.
fn natural_key_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Lowercased alphanumeric terms of a text.
fn terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn field_text(document: &Value, path: &str) -> Option<String> {
    let name = path.strip_prefix("$.").unwrap_or(path);
    match document.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn set_document(&self, key: &str, document: &Value) -> Result<(), StoreError> {
        self.state
            .lock()
            .await
            .documents
            .insert(key.to_string(), document.clone());
        Ok(())
    }

    async fn index_info(&self, index: &str) -> IndexLookup {
        let state = self.state.lock().await;
        match state.indexes.get(index) {
            Some(definition) => {
                let num_docs = state
                    .documents
                    .keys()
                    .filter(|key| key.starts_with(&definition.prefix))
                    .count() as u64;
                IndexLookup::Found(IndexInfo {
                    name: index.to_string(),
                    num_docs: Some(num_docs),
                })
            }
            None => IndexLookup::NotFound,
        }
    }

    async fn create_index(&self, definition: &IndexDefinition) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if state.indexes.contains_key(&definition.name) {
            return Err(StoreError::index_creation("Index already exists"));
        }
        state
            .indexes
            .insert(definition.name.clone(), definition.clone());
        state.index_create_count += 1;
        Ok(())
    }

    async fn search(&self, index: &str, query: &FieldQuery) -> Result<SearchResponse, StoreError> {
        let state = self.state.lock().await;
        let definition = state
            .indexes
            .get(index)
            .ok_or_else(|| StoreError::query(format!("{}: no such index", index)))?;

        let Some(field) = definition.fields.iter().find(|f| f.alias == query.field) else {
            return Err(StoreError::query(format!("Unknown field '{}'", query.field)));
        };

        let wanted = terms(&query.text);
        if wanted.is_empty() {
            return Ok(SearchResponse::empty());
        }

        let mut matches: Vec<(&String, &Value)> = state
            .documents
            .iter()
            .filter(|(key, _)| key.starts_with(&definition.prefix))
            .filter(|(_, doc)| {
                field_text(doc, &field.path)
                    .map(|text| {
                        let present = terms(&text);
                        wanted.iter().all(|t| present.contains(t))
                    })
                    .unwrap_or(false)
            })
            .collect();
        matches.sort_by(|(a, _), (b, _)| natural_key_order(a, b));

        let total = matches.len() as u64;
        let hits = matches
            .into_iter()
            .take(DEFAULT_RESULT_LIMIT)
            .map(|(key, doc)| SearchHit::new(key.clone(), doc.clone()))
            .collect();

        Ok(SearchResponse { total, hits })
    }

    async fn flush_all(&self) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.documents.clear();
        state.indexes.clear();
        state.flush_count += 1;
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn store_with_index() -> InMemoryStore {
        let store = InMemoryStore::new();
        store
            .create_index(&IndexDefinition::insults())
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_set_document_replaces_whole_document() {
        let store = InMemoryStore::new();
        store
            .set_document("insult:1", &json!({"insult": "a", "comment": "x"}))
            .await
            .unwrap();
        store
            .set_document("insult:1", &json!({"insult": "b"}))
            .await
            .unwrap();

        assert_eq!(store.document("insult:1").await, Some(json!({"insult": "b"})));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_index_lookup() {
        let store = InMemoryStore::new();
        assert_eq!(store.index_info("idx:insult").await, IndexLookup::NotFound);

        let store = store_with_index().await;
        store
            .set_document("insult:1", &json!({"insult": "a"}))
            .await
            .unwrap();
        store
            .set_document("other:1", &json!({"insult": "a"}))
            .await
            .unwrap();

        match store.index_info("idx:insult").await {
            IndexLookup::Found(info) => assert_eq!(info.num_docs, Some(1)),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_index_twice_fails() {
        let store = store_with_index().await;
        let result = store.create_index(&IndexDefinition::insults()).await;

        assert!(matches!(result, Err(StoreError::IndexCreationError(_))));
        assert_eq!(store.index_create_count().await, 1);
    }

    #[tokio::test]
    async fn test_search_matches_terms_in_field() {
        let store = store_with_index().await;
        store
            .set_document(
                "insult:1",
                &json!({"insult": "Your mom is so old", "createdby": "Martin Luther"}),
            )
            .await
            .unwrap();
        store
            .set_document("insult:2", &json!({"insult": "You are a mom's disappointment", "createdby": "Reddit"}))
            .await
            .unwrap();
        store
            .set_document("insult:3", &json!({"insult": "Nothing here", "createdby": "Luther"}))
            .await
            .unwrap();

        let moms = store
            .search("idx:insult", &FieldQuery::new("insult", "mom"))
            .await
            .unwrap();
        assert_eq!(moms.keys(), vec!["insult:1", "insult:2"]);

        let luther = store
            .search("idx:insult", &FieldQuery::new("createdby", "Martin Luther"))
            .await
            .unwrap();
        assert_eq!(luther.keys(), vec!["insult:1"]);
    }

    #[tokio::test]
    async fn test_search_ignores_other_prefixes() {
        let store = store_with_index().await;
        store
            .set_document("quote:1", &json!({"language": "en"}))
            .await
            .unwrap();

        let response = store
            .search("idx:insult", &FieldQuery::new("language", "en"))
            .await
            .unwrap();

        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_search_without_index_fails() {
        let store = InMemoryStore::new();
        let result = store
            .search("idx:insult", &FieldQuery::new("language", "en"))
            .await;

        assert!(matches!(result, Err(StoreError::QueryError(_))));
    }

    #[tokio::test]
    async fn test_search_limits_returned_hits() {
        let store = store_with_index().await;
        for i in 1..=12 {
            store
                .set_document(&format!("insult:{}", i), &json!({"language": "en"}))
                .await
                .unwrap();
        }

        let response = store
            .search("idx:insult", &FieldQuery::new("language", "en"))
            .await
            .unwrap();

        assert_eq!(response.total, 12);
        assert_eq!(response.len(), 10);
        assert_eq!(response.hits[1].key, "insult:2");
    }

    #[tokio::test]
    async fn test_flush_all_drops_documents_and_indexes() {
        let store = store_with_index().await;
        store
            .set_document("insult:1", &json!({"insult": "a"}))
            .await
            .unwrap();

        store.flush_all().await.unwrap();

        assert!(store.is_empty().await);
        assert_eq!(store.index_info("idx:insult").await, IndexLookup::NotFound);
        assert_eq!(store.flush_count().await, 1);
    }

    #[test]
    fn test_natural_key_order() {
        let mut keys = vec!["insult:10", "insult:2", "insult:1"];
        keys.sort_by(|a, b| natural_key_order(a, b));
        assert_eq!(keys, vec!["insult:1", "insult:2", "insult:10"]);
    }
}
