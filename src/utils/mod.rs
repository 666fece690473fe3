//! Utility functions shared by the resolver adapter and the formatter.

mod timing;

pub use timing::{elapsed_ms, round_ms};
