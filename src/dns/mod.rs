//! DNS resolution and record querying.
//!
//! This module provides the resolver adapter built on `hickory-resolver`:
//! - The [`RecordLookup`] seam and its hickory-backed implementation
//! - Error classification (not found, no answer, timeout, other)
//! - Type-specific record rendering (MX, SOA, TXT, ...)
//! - Timed single-type and multi-type queries
//!
//! Queries run sequentially; nothing here spawns tasks.

mod records;
mod resolution;

// Re-export public API
pub use records::render_record;
pub use resolution::{
    classify_resolve_error, query, query_multiple_types, HickoryLookup, RecordLookup,
};
