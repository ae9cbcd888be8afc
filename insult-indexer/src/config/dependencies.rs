//! Dependency initialization and wiring for the insult indexer.

use std::sync::Arc;
use tracing::info;

use super::Settings;
use crate::IndexingError;
use insult_indexer_ingest::{
    consumer::SourceConfig, FailurePolicy, HttpInsultSource, IndexFacade, InsultLoader,
    LoaderConfig,
};
use insult_indexer_repository::{DocumentStore, RedisStore, StoreConfig};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Loader that ingests insults into the store.
    pub loader: InsultLoader,
    /// Facade over the search index.
    pub facade: IndexFacade,
    /// Settings the dependencies were built from.
    pub settings: Settings,
}

impl Dependencies {
    /// Connect to Redis and build the loader and facade.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If Redis is unreachable or the HTTP client
    ///   cannot be built
    pub async fn new(settings: Settings) -> Result<Self, IndexingError> {
        info!(
            redis_url = %settings.redis_url,
            api_url = %settings.api_url,
            insult_count = settings.insult_count,
            "Initializing dependencies"
        );

        let store = RedisStore::connect(&StoreConfig::with_url(&settings.redis_url)).await?;
        info!(redis_url = %store.url(), "Redis connection established");

        Self::with_store(settings, Arc::new(store)).await
    }

    /// Build the loader and facade on top of an existing store.
    ///
    /// The store must answer its health check before anything else is wired.
    pub async fn with_store(
        settings: Settings,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, IndexingError> {
        if !store.health_check().await? {
            return Err(IndexingError::config("Document store is unhealthy"));
        }

        info!("Document store connection verified");

        let source = HttpInsultSource::new(SourceConfig {
            url: settings.api_url.clone(),
            timeout: settings.http_timeout,
            ..SourceConfig::default()
        })
        .map_err(|e| IndexingError::config(format!("Failed to create HTTP client: {}", e)))?;

        let failure_policy = if settings.continue_on_failure {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        };

        let loader = InsultLoader::with_config(
            Arc::new(source),
            store.clone(),
            LoaderConfig {
                retry_delay: settings.retry_delay,
                failure_policy,
                ..LoaderConfig::default()
            },
        );
        let facade = IndexFacade::new(store);

        Ok(Self {
            loader,
            facade,
            settings,
        })
    }
}
