//! Record classification.
//!
//! Turns the TXT records published at a record's name into a
//! `RecordCheckResult`. A present record without the expected version prefix is
//! `invalid`, never `valid`.

use std::time::Duration;

use log::{debug, warn};

use crate::dns::{extract_record_with_prefix, lookup_txt_with_timeout, TxtResolver};
use crate::error_handling::{categorize_lookup_error, ErrorType};
use crate::records::types::{RecordCheckResult, RecordKind, RecordStatus};

/// Classifies the TXT records found at the name of `kind`.
///
/// - first record starting with the kind's prefix → `valid` with that record
/// - records present, none matching → `invalid` with the first record
/// - no records → `not found`
pub fn classify_records(kind: &RecordKind, txt_records: &[String]) -> RecordCheckResult {
    if let Some(record) = extract_record_with_prefix(txt_records, kind.prefix()) {
        return RecordCheckResult::valid(record);
    }
    match txt_records.first() {
        Some(first) => RecordCheckResult::invalid(first.trim()),
        None => RecordCheckResult::not_found(),
    }
}

/// Queries the name of `kind` under `domain` and classifies the answer.
///
/// Never fails: lookup errors of any sort, including a timeout, yield
/// `not found` for this record only.
pub async fn classify<R: TxtResolver>(
    resolver: &R,
    domain: &str,
    kind: &RecordKind,
    timeout: Duration,
) -> RecordCheckResult {
    let name = kind.query_name(domain);
    match lookup_txt_with_timeout(resolver, &name, timeout).await {
        Ok(txt_records) => {
            let result = classify_records(kind, &txt_records);
            match result.status() {
                RecordStatus::Valid => debug!("{kind} record found at {name}"),
                RecordStatus::Invalid => debug!(
                    "{}: {} TXT record(s) at {} but none starts with {}",
                    ErrorType::RecordMalformed,
                    txt_records.len(),
                    name,
                    kind.prefix()
                ),
                RecordStatus::NotFound => {
                    debug!("{}: empty TXT answer at {name}", ErrorType::RecordAbsent)
                }
            }
            result
        }
        Err(e) => {
            let error_type = categorize_lookup_error(&e);
            if e.is_not_found() {
                debug!("{error_type}: {e}");
            } else {
                warn!("{error_type}: {e}; reporting {kind} as not found");
            }
            RecordCheckResult::not_found()
        }
    }
}
