//! dns_lookup library: DNS record lookups rendered as tables or JSON
//!
//! This library queries DNS records (A, AAAA, MX, CNAME, NS, TXT, SOA) for one
//! or more domains, one query at a time, and renders the results for display
//! or for saving to a file.
//!
//! # Example
//!
//! ```no_run
//! use dns_lookup::app::LogProgress;
//! use dns_lookup::dns::HickoryLookup;
//! use dns_lookup::initialization::init_resolver;
//! use dns_lookup::{run_lookup, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains: vec!["example.com".to_string()],
//!     ..Default::default()
//! };
//!
//! let lookup = HickoryLookup::new(init_resolver(config.server)?);
//! let report = run_lookup(&config, &lookup, &mut std::io::stdout(), &mut LogProgress).await?;
//! println!("{} of {} queries succeeded", report.successful, report.total_queries);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The hickory-backed resolver requires a Tokio runtime.

pub mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod models;
pub mod output;
mod run;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{FileError, LookupError, RunError};
pub use models::{MultiTypeResult, QueryResult, QueryStatus, RecordType};
pub use run::{run_lookup, LookupReport};
