//! Message types for the consumer.

/// Result of one request to the insult API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// HTTP 200 with the raw response body.
    Success(String),
    /// Any other HTTP status.
    Failure { status: u16 },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}
