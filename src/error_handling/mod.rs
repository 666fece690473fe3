//! Error handling.
//!
//! Errors are categorized by where they are handled:
//! - **Lookup errors**: per-query failures, recovered into a result
//! - **File errors**: unreadable or missing domain lists
//! - **Run errors**: failures that end the run with exit code 1
//! - **Initialization errors**: logger and resolver setup

mod types;

// Re-export public API
pub use types::{FileError, InitializationError, LookupError, RunError};
