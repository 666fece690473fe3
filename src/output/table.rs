//! Plain-text rendering of query results.

use crate::config::{BULK_RULE_WIDTH, FAILURE_MARKER, HEADER_RULE_BASE_WIDTH};
use crate::models::{MultiTypeResult, QueryResult, QueryStatus};

/// Header line plus `=` rule for one domain.
fn push_header(lines: &mut Vec<String>, domain: &str) {
    lines.push(format!("DNS Lookup Results for: {domain}"));
    lines.push("=".repeat(HEADER_RULE_BASE_WIDTH + domain.len()));
}

/// Formats a single query result.
///
/// Errors take one line: `❌ {domain} ({type}): {error}`. Successes get a
/// header, the records indented by two spaces and the query time. Both end
/// with a newline.
pub fn format_table(result: &QueryResult) -> String {
    if result.status == QueryStatus::Error {
        return format!(
            "{FAILURE_MARKER} {} ({}): {}\n",
            result.domain,
            result.record_type,
            result.error.as_deref().unwrap_or_default()
        );
    }

    let mut lines = Vec::with_capacity(result.records.len() + 6);
    push_header(&mut lines, &result.domain);
    lines.push(format!("{} Records:", result.record_type));
    lines.extend(result.records.iter().map(|record| format!("  {record}")));
    lines.push(String::new());
    lines.push(format!("Query Time: {}ms", result.query_time_ms));
    lines.push(String::new());

    lines.join("\n")
}

/// Formats every record type queried for one domain.
///
/// Failed types get a single `{type} Records: {error}` line; successful types
/// without records are skipped.
pub fn format_multiple_types(result: &MultiTypeResult) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, &result.domain);

    for type_result in &result.results {
        match type_result.status {
            QueryStatus::Success if !type_result.records.is_empty() => {
                lines.push(String::new());
                lines.push(format!("{} Records:", type_result.record_type));
                lines.extend(
                    type_result
                        .records
                        .iter()
                        .map(|record| format!("  {record}")),
                );
            }
            QueryStatus::Success => {}
            QueryStatus::Error => {
                lines.push(String::new());
                lines.push(format!(
                    "{} Records: {}",
                    type_result.record_type,
                    type_result.error.as_deref().unwrap_or_default()
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("Total Query Time: {}ms", result.total_time_ms));
    lines.push(String::new());

    lines.join("\n")
}

/// Formats a batch of results as consecutive tables under one header.
pub fn format_bulk_table(results: &[QueryResult]) -> String {
    let mut sections = Vec::with_capacity(results.len() + 3);
    sections.push(format!("DNS Bulk Lookup Results ({} domains)", results.len()));
    sections.push("=".repeat(BULK_RULE_WIDTH));
    sections.push(String::new());
    sections.extend(results.iter().map(format_table));

    sections.join("\n")
}
