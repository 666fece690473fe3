//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DNS_PORT, USAGE_EXAMPLES};
use crate::models::RecordType;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Rendering used for bulk results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Table,
    /// Pretty-printed JSON document
    Json,
}

/// Parses a `--server` value: an IP address, optionally with a port.
///
/// Bare addresses use port 53.
pub fn parse_server(value: &str) -> Result<SocketAddr, String> {
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    value
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| format!("invalid DNS server address '{value}'"))
}

/// Command-line options and configuration.
///
/// This struct is generated by `clap` from the field attributes and can also
/// be built programmatically through [`Default`].
///
/// # Examples
///
/// ```no_run
/// use dns_lookup::Config;
///
/// let config = Config {
///     domains: vec!["example.com".to_string()],
///     all_types: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_lookup",
    version,
    about = "DNS Lookup Tool - Query DNS records for domains",
    after_help = USAGE_EXAMPLES
)]
pub struct Config {
    /// Domain names to query
    pub domains: Vec<String>,

    /// DNS record type to query
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        ignore_case = true,
        default_value_t = RecordType::A
    )]
    pub record_type: RecordType,

    /// File containing list of domains to query
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Output format for bulk results
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Custom DNS server to use (IP or IP:port)
    #[arg(short = 's', long, value_parser = parse_server)]
    pub server: Option<SocketAddr>,

    /// Query all supported record types
    #[arg(long)]
    pub all_types: bool,

    /// Save output to file instead of stdout
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Write a sample domains file to this path and exit
    #[arg(long, value_name = "PATH")]
    pub create_sample: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            record_type: RecordType::A,
            file: None,
            output: OutputFormat::Table,
            server: None,
            all_types: false,
            output_file: None,
            create_sample: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
