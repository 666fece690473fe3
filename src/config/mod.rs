//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (supported record types, layout widths)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{parse_server, Config, LogFormat, LogLevel, OutputFormat};
