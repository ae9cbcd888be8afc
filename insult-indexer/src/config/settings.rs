//! Run settings read from the environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::IndexingError;
use insult_indexer_ingest::consumer::DEFAULT_API_URL;
use insult_indexer_repository::config::DEFAULT_REDIS_URL;

/// Default number of insults to ingest.
const DEFAULT_INSULT_COUNT: u64 = 25;

/// Default author for the author query.
const DEFAULT_SEARCH_AUTHOR: &str = "Reddit";

/// Default wait before retrying a failed fetch, in seconds.
const DEFAULT_RETRY_DELAY_SECS: u64 = 5;

/// Default HTTP request timeout, in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Settings for one indexer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub redis_url: String,
    pub api_url: String,
    pub insult_count: u64,
    pub search_author: String,
    pub retry_delay: Duration,
    pub http_timeout: Duration,
    /// Skip ordinals that fail twice instead of aborting the run.
    pub continue_on_failure: bool,
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `REDIS_URL`: Redis server URL (default: redis://localhost:6379)
    /// - `INSULT_API_URL`: Insult API endpoint (default: https://evilinsult.com/generate_insult.php)
    /// - `INSULT_COUNT`: Number of insults to ingest (default: 25)
    /// - `SEARCH_AUTHOR`: Author for the author query (default: Reddit)
    /// - `RETRY_DELAY_SECS`: Wait before retrying a failed fetch (default: 5)
    /// - `HTTP_TIMEOUT_SECS`: HTTP request timeout (default: 30)
    /// - `CONTINUE_ON_FAILURE`: Skip failed ordinals instead of aborting (default: false)
    pub fn from_env() -> Result<Self, IndexingError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            redis_url: string_or("REDIS_URL", DEFAULT_REDIS_URL),
            api_url: string_or("INSULT_API_URL", DEFAULT_API_URL),
            insult_count: parse_or(&lookup, "INSULT_COUNT", DEFAULT_INSULT_COUNT)?,
            search_author: string_or("SEARCH_AUTHOR", DEFAULT_SEARCH_AUTHOR),
            retry_delay: Duration::from_secs(parse_or(
                &lookup,
                "RETRY_DELAY_SECS",
                DEFAULT_RETRY_DELAY_SECS,
            )?),
            http_timeout: Duration::from_secs(parse_or(
                &lookup,
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
            continue_on_failure: parse_flag(&lookup, "CONTINUE_ON_FAILURE")?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, IndexingError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| IndexingError::config(format!("Invalid {} '{}': {}", name, raw, e))),
        _ => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, name: &str) -> Result<bool, IndexingError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(false);
    };

    match raw.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        other => Err(IndexingError::config(format!(
            "Invalid {} '{}': expected true or false",
            name, other
        ))),
    }
}
