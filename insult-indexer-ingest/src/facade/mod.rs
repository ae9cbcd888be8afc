//! Index and query facade.
//!
//! Makes sure the insult search index exists and answers the three standard
//! queries against it.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use insult_indexer_repository::{
    DocumentStore, FieldQuery, IndexDefinition, IndexInfo, IndexLookup, StoreError,
};
use insult_indexer_shared::SearchResponse;

/// Term searched for in the `insult` field.
const MOTHER_TERM: &str = "mom";

/// Value searched for in the `language` field.
const ENGLISH: &str = "en";

/// What `ensure_index` found or did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexStatus {
    /// The index already existed and was left untouched.
    Existing(IndexInfo),
    /// The store was flushed and the index created.
    Created,
}

/// Results of the three standard queries, in query order.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardQueryResults {
    /// The author searched for.
    pub author: String,
    /// Documents whose `createdby` matches the author.
    pub by_author: SearchResponse,
    /// Documents whose `insult` mentions "mom".
    pub mentioning_mom: SearchResponse,
    /// Documents whose `language` is "en".
    pub english: SearchResponse,
}

/// Facade over the insult search index.
pub struct IndexFacade {
    store: Arc<dyn DocumentStore>,
    definition: IndexDefinition,
}

impl IndexFacade {
    /// Create a facade for the insult index.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_definition(store, IndexDefinition::insults())
    }

    /// Create a facade for a custom index definition.
    pub fn with_definition(store: Arc<dyn DocumentStore>, definition: IndexDefinition) -> Self {
        Self { store, definition }
    }

    pub fn index_name(&self) -> &str {
        &self.definition.name
    }

    /// Ensure the search index exists.
    ///
    /// An existing index is trusted as-is, even if its schema differs. When the
    /// store reports the index as missing, the whole store is flushed and the
    /// index created. A failed probe changes nothing and is returned as
    /// `StoreError::IndexLookup`.
    #[instrument(skip(self), fields(index = %self.definition.name))]
    pub async fn ensure_index(&self) -> Result<IndexStatus, StoreError> {
        match self.store.index_info(&self.definition.name).await {
            IndexLookup::Found(info) => {
                info!(num_docs = ?info.num_docs, "Search index already exists");
                Ok(IndexStatus::Existing(info))
            }
            IndexLookup::NotFound => {
                warn!("Search index missing, flushing store and creating it");
                self.store.flush_all().await?;
                self.store.create_index(&self.definition).await?;
                Ok(IndexStatus::Created)
            }
            IndexLookup::TransientError(cause) => Err(StoreError::index_lookup(cause)),
        }
    }

    /// Run the three standard queries.
    ///
    /// Any failing query fails the whole call; no partial results are
    /// returned. A blank author matches nothing.
    #[instrument(skip(self))]
    pub async fn run_standard_queries(
        &self,
        author: &str,
    ) -> Result<StandardQueryResults, StoreError> {
        let by_author = if author.trim().is_empty() {
            SearchResponse::empty()
        } else {
            self.search("createdby", author).await?
        };
        let mentioning_mom = self.search("insult", MOTHER_TERM).await?;
        let english = self.search("language", ENGLISH).await?;

        info!(
            by_author = by_author.total,
            mentioning_mom = mentioning_mom.total,
            english = english.total,
            "Standard queries completed"
        );

        Ok(StandardQueryResults {
            author: author.to_string(),
            by_author,
            mentioning_mom,
            english,
        })
    }

    async fn search(&self, field: &str, text: &str) -> Result<SearchResponse, StoreError> {
        self.store
            .search(&self.definition.name, &FieldQuery::new(field, text))
            .await
    }
}
