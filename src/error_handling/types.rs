//! Error type definitions.
//!
//! This module defines the error types used throughout the application. Query
//! failures are data rather than process failures: a [`LookupError`] is always
//! folded into a [`QueryResult`](crate::models::QueryResult) by the caller.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::models::RecordType;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Classified outcome of a failed DNS lookup.
///
/// The `Display` form is the message shown to the user for that result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The queried name does not exist (NXDOMAIN).
    #[error("Domain not found")]
    NotFound,

    /// The name exists but has no records of the requested type.
    #[error("No {0} records found")]
    NoAnswer(RecordType),

    /// The resolver gave up waiting for an answer.
    #[error("Query timeout")]
    Timeout,

    /// Any other resolver failure, carrying the underlying message.
    #[error("Query failed: {0}")]
    Failed(String),
}

/// Error types for reading domain lists.
#[derive(Error, Debug)]
pub enum FileError {
    /// The input path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be opened or read.
    #[error("Cannot read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort a lookup run.
#[derive(Error, Debug)]
pub enum RunError {
    /// Neither domains nor an input file were supplied.
    #[error("No domains or input file supplied")]
    NoInput,

    /// The bulk input file could not be read.
    #[error(transparent)]
    Input(#[from] FileError),

    /// The sample domains file could not be written.
    #[error("Cannot create sample file {}", path.display())]
    SampleFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the console failed.
    #[error("Failed to write output")]
    Io(#[from] std::io::Error),

    /// Results could not be serialized to JSON.
    #[error("Failed to serialize results")]
    Json(#[from] serde_json::Error),
}
