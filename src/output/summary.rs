//! Summary statistics over a set of query results.

use std::fmt;

use crate::models::QueryResult;
use crate::utils::round_ms;

/// Counts and timings for a batch of queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuerySummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Mean query time over all results, errors included (0 when empty)
    pub average_time_ms: f64,
    pub total_time_ms: f64,
}

impl QuerySummary {
    pub fn from_results(results: &[QueryResult]) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|r| r.is_success()).count();
        let total_time_ms: f64 = results.iter().map(|r| r.query_time_ms).sum();
        let average_time_ms = if total > 0 {
            round_ms(total_time_ms / total as f64)
        } else {
            0.0
        };

        Self {
            total,
            successful,
            failed: total - successful,
            average_time_ms,
            total_time_ms: round_ms(total_time_ms),
        }
    }
}

impl fmt::Display for QuerySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary: {}/{} successful | Failed: {} | Average query time: {}ms | Total time: {}ms",
            self.successful, self.total, self.failed, self.average_time_ms, self.total_time_ms
        )
    }
}

/// Formats the one-line summary for a batch of results.
pub fn format_summary(results: &[QueryResult]) -> String {
    QuerySummary::from_results(results).to_string()
}
