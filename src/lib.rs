//! dmarc_checker library: email-authentication record discovery
//!
//! This library checks whether a domain publishes valid DMARC, SPF and DKIM
//! records. DMARC and SPF are looked up at their well-known names; DKIM keys
//! are probed under a list of likely selector names since the real selector
//! cannot be discovered from outside.
//!
//! Checks are read-only and best effort: a DNS failure never fails a check,
//! it shows up as `not found` on the affected record.
//!
//! # Example
//!
//! ```no_run
//! use dmarc_checker::{Config, DomainChecker};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let checker = DomainChecker::from_config(&config)?;
//!
//! let result = checker.check_domain("example.com").await?;
//! println!("DMARC: {}, SPF: {}", result.dmarc.status(), result.spf.status());
//! for selector in result.found_selectors() {
//!     println!("DKIM key under selector {}", selector.selector);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod check;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod records;

// Re-export public API
pub use check::{
    check_domains, parse_domain_list, BulkCheckRow, CheckDomainResponse, DomainCheckResult,
    DomainChecker, ErrorResponse,
};
pub use config::{Config, LogFormat, LogLevel, NameserverChoice, OutputFormat};
pub use dns::{DnsTxtClient, TxtResolver};
pub use error_handling::{BulkCheckError, CheckError, LookupError};
pub use records::{DkimSelectorResult, DmarcTag, RecordCheckResult, RecordStatus};
