//! Record lookups and query result construction.
//!
//! [`RecordLookup`] is the seam between the orchestrator and the DNS transport.
//! [`query`] and [`query_multiple_types`] time each lookup and fold every
//! outcome, including failures, into a [`QueryResult`].

use std::time::Instant;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RecordType as WireRecordType;
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::dns::records::render_record;
use crate::error_handling::LookupError;
use crate::models::{MultiTypeResult, QueryResult, RecordType};
use crate::utils::{elapsed_ms, round_ms};

/// Resolves one record type for one name.
///
/// Implementations return the rendered records in resolver order, or a
/// classified [`LookupError`]. Lookups run one at a time, so implementations
/// need not be `Send`.
#[async_trait(?Send)]
pub trait RecordLookup {
    async fn lookup(&self, domain: &str, record_type: RecordType)
        -> Result<Vec<String>, LookupError>;
}

/// [`RecordLookup`] backed by `hickory-resolver`.
pub struct HickoryLookup {
    resolver: TokioAsyncResolver,
}

impl HickoryLookup {
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait(?Send)]
impl RecordLookup for HickoryLookup {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupError> {
        let wire_type = WireRecordType::from(record_type);
        let answer = self
            .resolver
            .lookup(domain, wire_type)
            .await
            .map_err(|e| classify_resolve_error(&e, record_type))?;

        // CNAME records followed on the way to the answer are not part of it
        Ok(answer
            .iter()
            .filter(|rdata| rdata.record_type() == wire_type)
            .map(render_record)
            .collect())
    }
}

/// Maps a hickory resolution error onto the user-facing error kinds.
pub fn classify_resolve_error(error: &ResolveError, record_type: RecordType) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            LookupError::NotFound
        }
        // Server failures and refusals also arrive as NoRecordsFound
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NoError =>
        {
            LookupError::NoAnswer(record_type)
        }
        ResolveErrorKind::Timeout => LookupError::Timeout,
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            LookupError::Timeout
        }
        _ => LookupError::Failed(error.to_string()),
    }
}

/// Queries a single record type for `domain`.
///
/// Only the lookup itself is timed. Failures never propagate: they become
/// error results with no records and zero query time.
pub async fn query<R>(lookup: &R, domain: &str, record_type: RecordType) -> QueryResult
where
    R: RecordLookup + ?Sized,
{
    let start = Instant::now();
    let outcome = lookup.lookup(domain, record_type).await;
    let query_time_ms = elapsed_ms(start);

    match outcome {
        Ok(records) if !records.is_empty() => {
            debug!(
                "{domain} {record_type}: {} records in {query_time_ms}ms",
                records.len()
            );
            QueryResult::success(domain, record_type, records, query_time_ms)
        }
        Ok(_) => {
            debug!("{domain} {record_type}: empty answer");
            QueryResult::failure(domain, record_type, LookupError::NoAnswer(record_type))
        }
        Err(e) => {
            debug!("{domain} {record_type}: {e}");
            QueryResult::failure(domain, record_type, e)
        }
    }
}

/// Queries each of `record_types` for `domain`, sequentially and in order.
///
/// A type requested twice is queried twice; the later result replaces the
/// earlier one in place. Only successful query times count towards the total.
pub async fn query_multiple_types<R>(
    lookup: &R,
    domain: &str,
    record_types: &[RecordType],
) -> MultiTypeResult
where
    R: RecordLookup + ?Sized,
{
    let mut results: Vec<QueryResult> = Vec::with_capacity(record_types.len());
    let mut total_time_ms = 0.0;

    for &record_type in record_types {
        let result = query(lookup, domain, record_type).await;
        if result.is_success() {
            total_time_ms += result.query_time_ms;
        }
        match results.iter_mut().find(|r| r.record_type == record_type) {
            Some(existing) => *existing = result,
            None => results.push(result),
        }
    }

    MultiTypeResult {
        domain: domain.to_string(),
        results,
        total_time_ms: round_ms(total_time_ms),
    }
}
