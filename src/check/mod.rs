//! Domain checks.
//!
//! This module provides:
//! - `DomainChecker`, which runs the DMARC, SPF and DKIM checks of a domain
//!   concurrently and joins them into a `DomainCheckResult`
//! - Bulk checking with bounded concurrency
//! - The security score
//! - JSON response bodies and CSV export

mod bulk;
mod domain;
mod export;
mod response;
mod score;

// Re-export public API
pub use bulk::{check_domains, parse_domain_list, BulkCheckRow};
pub use domain::{normalize_domain, DomainCheckResult, DomainChecker};
pub use export::write_csv;
pub use response::{CheckDomainResponse, ErrorResponse};
pub use score::security_score;
