use std::env;
use std::process::ExitCode;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use insult_indexer::display::print_results;
use insult_indexer::{Dependencies, IndexingError, Settings};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run(deps: Dependencies) -> Result<(), IndexingError> {
    let status = deps.facade.ensure_index().await?;
    info!(status = ?status, "Search index ready");

    let report = deps.loader.ingest(deps.settings.insult_count).await?;
    info!(
        run_id = %report.run_id,
        succeeded = report.succeeded.len(),
        failed = ?report.failed,
        "Ingestion finished"
    );

    match deps
        .facade
        .run_standard_queries(&deps.settings.search_author)
        .await
    {
        Ok(results) => print_results(&results),
        Err(e) => {
            error!("There was a problem querying the index");
            debug!(error = %e, "Query failure cause");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_tracing();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let deps = match Dependencies::new(settings).await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return ExitCode::FAILURE;
        }
    };

    match run(deps).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Indexer run failed");
            ExitCode::FAILURE
        }
    }
}
