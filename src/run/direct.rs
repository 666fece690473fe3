//! Direct lookups for domains given on the command line.

use std::io::Write;

use crate::config::{Config, SUPPORTED_RECORD_TYPES};
use crate::dns::{query, query_multiple_types, RecordLookup};
use crate::error_handling::RunError;
use crate::output::{format_multiple_types, format_summary, format_table};

use super::{Destination, LookupReport};

/// Queries each domain in order and emits its output as soon as it is ready.
///
/// Single-type runs end with a summary line that always goes to `out`, even
/// when per-domain output goes to a file.
pub(super) async fn run_direct<R, W>(
    config: &Config,
    lookup: &R,
    out: &mut W,
) -> Result<LookupReport, RunError>
where
    R: RecordLookup + ?Sized,
    W: Write,
{
    let mut destination = Destination::new(config.output_file.as_deref());
    let mut report = LookupReport::default();
    let mut results = Vec::new();

    for domain in &config.domains {
        let rendered = if config.all_types {
            let multi = query_multiple_types(lookup, domain, &SUPPORTED_RECORD_TYPES).await;
            report.tally(&multi.results);
            format_multiple_types(&multi)
        } else {
            let result = query(lookup, domain, config.record_type).await;
            let rendered = format_table(&result);
            results.push(result);
            rendered
        };

        destination.emit(&rendered, out).await?;
    }

    if !results.is_empty() {
        report.tally(&results);
        writeln!(out, "\n{}", format_summary(&results))?;
        out.flush()?;
    }

    Ok(report)
}
