//! Record checks.
//!
//! This module provides:
//! - Record kinds, statuses and per-record results
//! - Classification of TXT answers into `valid`, `invalid` or `not found`
//! - DKIM selector probing
//! - DMARC tag parsing and analysis

mod classify;
mod dkim;
pub mod dmarc;
mod types;

// Re-export public API
pub use classify::{classify, classify_records};
pub use dkim::{found_selectors, probe_selectors, summarize_selectors};
pub use dmarc::{analyze_dmarc, parse_tags, DmarcAnalysis, DmarcTag};
pub use types::{DkimSelectorResult, RecordCheckResult, RecordKind, RecordStatus};
