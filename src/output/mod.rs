//! Output formatting.
//!
//! Pure functions that render query results as text tables, JSON documents and
//! one-line summaries. Nothing here writes to the console or to files.

mod json;
mod summary;
mod table;

use crate::config::OutputFormat;
use crate::models::QueryResult;

// Re-export public API
pub use json::{format_json, format_json_at};
pub use summary::{format_summary, QuerySummary};
pub use table::{format_multiple_types, format_table};

/// Formats a batch of results in the requested format.
///
/// # Errors
///
/// Only JSON output can fail, if serialization fails.
pub fn format_bulk_results(
    results: &[QueryResult],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => format_json(results),
        OutputFormat::Table => Ok(table::format_bulk_table(results)),
    }
}
