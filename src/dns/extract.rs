//! DNS record extraction utilities.
//!
//! This module provides functions to pick specific records out of the TXT
//! records published at a name, identified by their version prefix.

/// Extracts the first record starting with `prefix`.
///
/// Each record is trimmed of surrounding whitespace before the prefix check,
/// which is case-sensitive. Records are scanned in the order given, so the
/// first match wins and later matches are ignored.
///
/// # Arguments
///
/// * `txt_records` - TXT record strings as returned by the resolver
/// * `prefix` - Version token the record must start with (e.g. `v=spf1`)
///
/// # Returns
///
/// The trimmed matching record, or `None` if no record matches.
pub fn extract_record_with_prefix<'a>(txt_records: &'a [String], prefix: &str) -> Option<&'a str> {
    txt_records
        .iter()
        .map(|txt| txt.trim())
        .find(|txt| txt.starts_with(prefix))
}
