//! Error categorization.
//!
//! This module maps resolver errors onto `LookupError` and lookup errors onto
//! the `ErrorType` taxonomy used in log lines.

use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

use super::types::{ErrorType, LookupError};

/// Categorizes a `trust_dns_resolver` error for the queried `name`.
///
/// NXDOMAIN and NODATA answers both arrive as `NoRecordsFound` and become
/// `LookupError::NotFound`. Resolver timeouts become `LookupError::Timeout`.
/// Everything else (I/O, protocol, no reachable nameserver) is a query failure.
pub fn categorize_resolve_error(name: &str, error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NotFound(name.to_string()),
        ResolveErrorKind::Timeout => LookupError::Timeout(name.to_string()),
        _ => LookupError::Query {
            name: name.to_string(),
            reason: error.to_string(),
        },
    }
}

/// Categorizes a `LookupError` into an `ErrorType`.
pub fn categorize_lookup_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::NotFound(_) => ErrorType::RecordAbsent,
        LookupError::Timeout(_) | LookupError::Query { .. } => ErrorType::QueryTransportError,
    }
}
