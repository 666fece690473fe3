//! Bulk lookups for domains read from a file.

use std::io::Write;
use std::path::Path;

use log::info;

use crate::app::{ProgressEvent, ProgressSink};
use crate::config::Config;
use crate::dns::{query, RecordLookup};
use crate::error_handling::RunError;
use crate::input::{read_domains, write_output};
use crate::output::{format_bulk_results, format_summary};

use super::{warn_unsaved, LookupReport};

/// Queries every domain in `file` for the configured record type, then emits
/// all results and the summary as one block.
pub(super) async fn run_bulk<R, W>(
    config: &Config,
    file: &Path,
    lookup: &R,
    out: &mut W,
    progress: &mut dyn ProgressSink,
) -> Result<LookupReport, RunError>
where
    R: RecordLookup + ?Sized,
    W: Write,
{
    let domains = read_domains(file).await?;
    let total = domains.len();
    info!("Total domains in file: {total}");
    writeln!(out, "Processing {total} domains from {}...", file.display())?;
    out.flush()?;

    let mut results = Vec::with_capacity(total);
    for (index, domain) in domains.iter().enumerate() {
        progress.on_progress(ProgressEvent {
            current: index + 1,
            total,
        });
        results.push(query(lookup, domain, config.record_type).await);
    }
    progress.finish();

    let rendered = format_bulk_results(&results, config.output)?;
    let full_output = format!("{rendered}\n{}", format_summary(&results));

    match &config.output_file {
        Some(output_file) => {
            if write_output(&full_output, output_file).await {
                writeln!(out, "Results saved to {}", output_file.display())?;
            } else {
                warn_unsaved(out, output_file)?;
            }
        }
        None => writeln!(out, "{full_output}")?,
    }
    out.flush()?;

    Ok(LookupReport::from_results(&results))
}
