//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger and resolver initialization
//! - Interrupt handling and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::debug;

use dns_lookup::app::progress_for_stdout;
use dns_lookup::dns::HickoryLookup;
use dns_lookup::initialization::{init_logger_with, init_resolver};
use dns_lookup::{run_lookup, Config, RunError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tokio::select! {
        outcome = execute(config) => match outcome {
            Ok(code) => code,
            Err(e) => {
                println!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!("\nOperation cancelled by user.");
            ExitCode::FAILURE
        }
    }
}

async fn execute(config: Config) -> Result<ExitCode> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let resolver = init_resolver(config.server).context("Failed to initialize DNS resolver")?;
    let lookup = HickoryLookup::new(resolver);
    let mut progress = progress_for_stdout();
    let mut stdout = std::io::stdout();

    match run_lookup(&config, &lookup, &mut stdout, progress.as_mut()).await {
        Ok(report) => {
            debug!(
                "Finished: {} queries, {} failed",
                report.total_queries, report.failed
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(RunError::NoInput) => {
            Config::command().print_help()?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
