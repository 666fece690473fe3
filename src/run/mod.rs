//! Lookup run orchestration.
//!
//! Chooses a code path from the configuration and drives it to completion:
//! - `--create-sample`: write a sample domains file
//! - `--file`: bulk lookup of every domain in a file
//! - positional domains: direct lookup, one domain at a time
//!
//! Per-query failures are part of the output and never end a run early.

mod bulk;
mod direct;

use std::io::Write;
use std::path::Path;

use log::info;

use crate::app::ProgressSink;
use crate::config::Config;
use crate::dns::RecordLookup;
use crate::error_handling::RunError;
use crate::input::{append_output, create_sample_domains_file, write_output};
use crate::models::QueryResult;

/// Outcome counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupReport {
    /// Number of queries performed (one per domain and record type)
    pub total_queries: usize,
    /// Queries that returned records
    pub successful: usize,
    /// Queries that ended in an error result
    pub failed: usize,
}

impl LookupReport {
    fn tally(&mut self, results: &[QueryResult]) {
        let successful = results.iter().filter(|r| r.is_success()).count();
        self.total_queries += results.len();
        self.successful += successful;
        self.failed += results.len() - successful;
    }

    fn from_results(results: &[QueryResult]) -> Self {
        let mut report = Self::default();
        report.tally(results);
        report
    }
}

/// Runs the lookup described by `config`.
///
/// Rendered output, confirmations and warnings go to `out`. Bulk runs report
/// per-domain progress to `progress`.
///
/// # Errors
///
/// - `RunError::NoInput` if neither domains nor a file were given
/// - `RunError::Input` if the bulk input file is missing or unreadable
/// - `RunError::SampleFile` if the sample file cannot be written
/// - `RunError::Io` / `RunError::Json` if output cannot be produced
pub async fn run_lookup<R, W>(
    config: &Config,
    lookup: &R,
    out: &mut W,
    progress: &mut dyn ProgressSink,
) -> Result<LookupReport, RunError>
where
    R: RecordLookup + ?Sized,
    W: Write,
{
    if let Some(path) = &config.create_sample {
        create_sample_domains_file(path)
            .await
            .map_err(|source| RunError::SampleFile {
                path: path.clone(),
                source,
            })?;
        writeln!(out, "Sample domains file created: {}", path.display())?;
        return Ok(LookupReport::default());
    }

    let report = if let Some(file) = &config.file {
        bulk::run_bulk(config, file, lookup, out, progress).await?
    } else if !config.domains.is_empty() {
        direct::run_direct(config, lookup, out).await?
    } else {
        return Err(RunError::NoInput);
    };

    info!(
        "Completed {} queries ({} succeeded, {} failed)",
        report.total_queries, report.successful, report.failed
    );
    Ok(report)
}

/// Where rendered per-domain output goes in a direct run.
///
/// With an output file, the first successful write replaces the file and later
/// writes append to it.
struct Destination<'a> {
    file: Option<&'a Path>,
    started: bool,
}

impl<'a> Destination<'a> {
    fn new(file: Option<&'a Path>) -> Self {
        Self {
            file,
            started: false,
        }
    }

    async fn emit<W: Write>(&mut self, content: &str, out: &mut W) -> std::io::Result<()> {
        let Some(path) = self.file else {
            write!(out, "{content}")?;
            return out.flush();
        };

        let saved = if self.started {
            append_output(content, path).await
        } else {
            write_output(content, path).await
        };
        self.started |= saved;
        if !saved {
            warn_unsaved(out, path)?;
        }
        Ok(())
    }
}

/// Prints the warning for an output file that could not be written.
///
/// The content is not re-emitted to the console.
fn warn_unsaved<W: Write>(out: &mut W, path: &Path) -> std::io::Result<()> {
    writeln!(out, "Warning: Could not save output to {}", path.display())
}
