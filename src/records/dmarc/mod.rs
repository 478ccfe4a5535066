//! DMARC record breakdown.
//!
//! - `parse_tags` splits a record into its `tag=value` pairs
//! - `analyze_dmarc` explains each tag and flags questionable values
//!
//! Both are display aids: they accept any input and never fail.

mod analysis;

use serde::{Deserialize, Serialize};

pub use analysis::{analyze_dmarc, Assessment, DmarcAnalysis, TagFinding, DMARC_TAG_REFERENCE};

/// One `tag=value` pair of a DMARC record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmarcTag {
    pub key: String,
    pub value: String,
}

impl DmarcTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Splits a raw DMARC record into tags.
///
/// Segments are separated by `;` and trimmed; empty segments (trailing or
/// doubled semicolons) are dropped. Each segment is split on its first `=`,
/// a segment without `=` becomes a tag with an empty value. Order and
/// duplicate tags are kept as published.
///
/// # Examples
///
/// ```
/// use dmarc_checker::records::parse_tags;
///
/// let tags = parse_tags("v=DMARC1; p=none;;");
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[1].key, "p");
/// assert_eq!(tags[1].value, "none");
/// ```
pub fn parse_tags(raw: &str) -> Vec<DmarcTag> {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => DmarcTag::new(key.trim(), value.trim()),
            None => DmarcTag::new(segment, ""),
        })
        .collect()
}
