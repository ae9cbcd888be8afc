//! Configuration types for the Redis document store.

use std::time::Duration;

/// Default Redis URL.
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Connection settings for `RedisStore`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Redis server URL (e.g. "redis://localhost:6379").
    pub url: String,
    /// Maximum time to wait for a command response.
    pub response_timeout: Duration,
    /// Maximum time to wait while establishing the connection.
    pub connection_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REDIS_URL.to_string(),
            response_timeout: Duration::from_secs(5),
            connection_timeout: Duration::from_secs(5),
        }
    }
}

impl StoreConfig {
    /// Create a config for the given URL with default timeouts.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}
