//! Ingest three insults from a mocked API and query them back.

use std::sync::Arc;
use std::time::Duration;

use insult_indexer_ingest::consumer::SourceConfig;
use insult_indexer_ingest::{
    HttpInsultSource, IndexFacade, IndexStatus, IngestError, InsultLoader, LoaderConfig,
};
use insult_indexer_repository::InMemoryStore;
use mockito::{Matcher, Server};
use serde_json::{json, Value};

fn payload() -> Value {
    json!({
        "number": "42",
        "language": "en",
        "insult": "Your mom is a mystery",
        "created": "2024-03-01 12:00:00",
        "shown": "1200",
        "createdby": "Reddit",
        "active": "1",
        "comment": "from r/insults"
    })
}

fn source_for(server: &Server) -> Arc<HttpInsultSource> {
    Arc::new(
        HttpInsultSource::new(SourceConfig {
            url: format!("{}/generate_insult.php", server.url()),
            ..SourceConfig::default()
        })
        .unwrap(),
    )
}

#[tokio::test]
async fn test_ingest_then_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/generate_insult.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lang".into(), "en".into()),
            Matcher::UrlEncoded("type".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body(payload().to_string())
        .expect(3)
        .create_async()
        .await;

    let store = Arc::new(InMemoryStore::new());
    let facade = IndexFacade::new(store.clone());
    let loader = InsultLoader::new(source_for(&server), store.clone());

    assert_eq!(facade.ensure_index().await.unwrap(), IndexStatus::Created);
    let report = loader.ingest(3).await.unwrap();

    mock.assert_async().await;
    assert!(report.is_complete());
    assert_eq!(store.keys().await, vec!["insult:1", "insult:2", "insult:3"]);
    for key in store.keys().await {
        assert_eq!(store.document(&key).await, Some(payload()));
    }

    let results = facade.run_standard_queries("Reddit").await.unwrap();
    assert_eq!(results.by_author.len(), 3);
    assert_eq!(results.english.len(), 3);
    assert_eq!(results.mentioning_mom.len(), 3);
    assert_eq!(
        results.by_author.hits[0].record().comment.as_deref(),
        Some("from r/insults")
    );
}

#[tokio::test]
async fn test_rate_limited_api_aborts_run() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/generate_insult.php")
        .match_query(Matcher::Any)
        .with_status(429)
        .expect(2)
        .create_async()
        .await;

    let store = Arc::new(InMemoryStore::new());
    let config = LoaderConfig {
        retry_delay: Duration::from_millis(10),
        ..LoaderConfig::default()
    };
    let loader = InsultLoader::with_config(source_for(&server), store.clone(), config);

    let result = loader.ingest(5).await;

    assert!(matches!(
        result,
        Err(IngestError::FetchFailed {
            ordinal: 1,
            status: 429
        })
    ));
    assert!(store.is_empty().await);
}
