//! Query result data model.
//!
//! Results are produced once per query and never mutated afterwards. The
//! constructors on [`QueryResult`] are the only way to build one, so the
//! success/error invariants hold everywhere a result is consumed.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};

/// DNS record types the tool can query.
///
/// Declaration order matches [`SUPPORTED_RECORD_TYPES`](crate::config::SUPPORTED_RECORD_TYPES).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)] // Record type mnemonics are conventionally upper-case
pub enum RecordType {
    #[value(name = "A")]
    A,
    #[value(name = "AAAA")]
    AAAA,
    #[value(name = "MX")]
    MX,
    #[value(name = "CNAME")]
    CNAME,
    #[value(name = "NS")]
    NS,
    #[value(name = "TXT")]
    TXT,
    #[value(name = "SOA")]
    SOA,
}

impl From<RecordType> for hickory_resolver::proto::rr::RecordType {
    fn from(record_type: RecordType) -> Self {
        use hickory_resolver::proto::rr::RecordType as Wire;
        match record_type {
            RecordType::A => Wire::A,
            RecordType::AAAA => Wire::AAAA,
            RecordType::MX => Wire::MX,
            RecordType::CNAME => Wire::CNAME,
            RecordType::NS => Wire::NS,
            RecordType::TXT => Wire::TXT,
            RecordType::SOA => Wire::SOA,
        }
    }
}

/// Outcome of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Success,
    Error,
}

/// Result of querying one record type for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Domain as supplied by the user
    pub domain: String,
    /// Record type that was queried
    pub record_type: RecordType,
    /// Rendered records in resolver order (empty on error)
    pub records: Vec<String>,
    /// Time spent in the resolver, in milliseconds (0 on error)
    pub query_time_ms: f64,
    /// Whether the query produced records
    pub status: QueryStatus,
    /// Human-readable failure reason, present only on error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    /// Builds a successful result.
    ///
    /// An empty `records` list is not a success; it is recorded as a
    /// "No {type} records found" error instead.
    pub fn success(
        domain: impl Into<String>,
        record_type: RecordType,
        records: Vec<String>,
        query_time_ms: f64,
    ) -> Self {
        if records.is_empty() {
            return Self::failure(domain, record_type, format!("No {record_type} records found"));
        }
        Self {
            domain: domain.into(),
            record_type,
            records,
            query_time_ms,
            status: QueryStatus::Success,
            error: None,
        }
    }

    /// Builds an error result with no records and zero query time.
    pub fn failure(
        domain: impl Into<String>,
        record_type: RecordType,
        error: impl ToString,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            records: Vec::new(),
            query_time_ms: 0.0,
            status: QueryStatus::Error,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }
}

/// Results of querying several record types for one domain.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiTypeResult {
    pub domain: String,
    /// One entry per distinct record type, in the order first requested
    pub results: Vec<QueryResult>,
    /// Sum of successful query times, in milliseconds
    pub total_time_ms: f64,
}

impl MultiTypeResult {
    /// Returns the result for `record_type`, if it was queried.
    pub fn get(&self, record_type: RecordType) -> Option<&QueryResult> {
        self.results
            .iter()
            .find(|result| result.record_type == record_type)
    }
}
