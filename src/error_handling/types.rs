//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! `ErrorType` taxonomy used to categorize degraded lookup outcomes.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver (e.g. unreadable system configuration).
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors that abort a whole domain check.
///
/// Only invalid input aborts a check. Every DNS problem is contained within its
/// own record check and degrades to a status value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The domain was empty or only whitespace. Rejected before any DNS query.
    #[error("Domain is required")]
    InvalidInput,

    /// The task running a check died. Only produced by bulk checks, where each
    /// domain runs in its own task.
    #[error("Failed to check domain: {0}")]
    Internal(String),
}

/// Outcome of a single failed TXT lookup.
///
/// `NotFound` is a normal answer (NXDOMAIN or NODATA). `Timeout` and `Query`
/// are transport failures. Callers fold all three into "not found" but the
/// distinction is kept for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name does not exist or has no TXT records.
    #[error("no TXT records at {0}")]
    NotFound(String),

    /// The query did not complete within the configured timeout.
    #[error("TXT lookup for {0} timed out")]
    Timeout(String),

    /// Network, server or protocol failure.
    #[error("TXT lookup for {name} failed: {reason}")]
    Query { name: String, reason: String },
}

impl LookupError {
    /// Returns `true` for the "record absent" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

/// Errors rejecting a bulk check before any domain is checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BulkCheckError {
    /// No usable domain in the input.
    #[error("Please enter at least one domain")]
    NoDomains,

    /// More domains than a single bulk check accepts.
    #[error("Maximum {max} domains at a time, got {count}")]
    TooManyDomains { count: usize, max: usize },
}

/// Categories of problems met while checking a domain.
///
/// Used to label log lines consistently. Only `InvalidInput` is ever surfaced
/// to the caller as an error; the others map to record statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Empty or missing domain
    InvalidInput,
    /// No TXT record at the expected name (maps to `not found`)
    RecordAbsent,
    /// TXT record present but without the expected version prefix (maps to `invalid`)
    RecordMalformed,
    /// Timeout, network or server failure (maps to `not found`)
    QueryTransportError,
    /// A check task died unexpectedly (maps to `not found`)
    TaskFailure,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidInput => "Invalid input",
            ErrorType::RecordAbsent => "Record absent",
            ErrorType::RecordMalformed => "Record malformed",
            ErrorType::QueryTransportError => "DNS query transport error",
            ErrorType::TaskFailure => "Check task failure",
        }
    }
}
