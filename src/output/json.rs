//! JSON rendering of bulk results.

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;

use crate::models::QueryResult;

/// Envelope written for `--output json`.
#[derive(Debug, Serialize)]
struct BulkReport<'a> {
    timestamp: String,
    total_queries: usize,
    results: &'a [QueryResult],
}

/// Formats results as a pretty-printed JSON document stamped with the current time.
///
/// # Errors
///
/// Returns the serializer error if a result cannot be encoded.
pub fn format_json(results: &[QueryResult]) -> serde_json::Result<String> {
    format_json_at(results, Local::now())
}

/// Formats results as JSON with an explicit timestamp.
pub fn format_json_at(
    results: &[QueryResult],
    timestamp: DateTime<Local>,
) -> serde_json::Result<String> {
    let report = BulkReport {
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Micros, false),
        total_queries: results.len(),
        results,
    };
    serde_json::to_string_pretty(&report)
}
