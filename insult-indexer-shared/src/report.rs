//! Ingestion run report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one ingestion run.
///
/// Ordinals are 1-based and match the store key suffix (`insult:{ordinal}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Identifier for correlating log lines of one run.
    pub run_id: Uuid,
    /// Number of records the run was asked for.
    pub requested: u64,
    /// Ordinals stored successfully.
    pub succeeded: Vec<u64>,
    /// Ordinals whose fetch failed twice.
    pub failed: Vec<u64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl IngestReport {
    /// Start a report for a run of `requested` records.
    pub fn new(requested: u64) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            requested,
            succeeded: Vec::new(),
            failed: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record_success(&mut self, ordinal: u64) {
        self.succeeded.push(ordinal);
    }

    pub fn record_failure(&mut self, ordinal: u64) {
        self.failed.push(ordinal);
    }

    /// Stamp the finish time.
    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    /// True when every requested ordinal was stored.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.succeeded.len() as u64 == self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_report() {
        let mut report = IngestReport::new(2);
        report.record_success(1);
        report.record_success(2);
        let report = report.finish();

        assert!(report.is_complete());
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn test_report_with_failure() {
        let mut report = IngestReport::new(3);
        report.record_success(1);
        report.record_failure(2);
        report.record_success(3);

        assert!(!report.is_complete());
        assert_eq!(report.failed, vec![2]);
        assert_eq!(report.succeeded, vec![1, 3]);
    }

    #[test]
    fn test_empty_run_is_complete() {
        assert!(IngestReport::new(0).is_complete());
    }
}
