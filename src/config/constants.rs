//! Configuration constants.
//!
//! This module defines the constants used throughout the application: DNS
//! timeouts, record prefixes, DKIM selector candidates and bulk-check limits.

// Network operation timeouts
/// DNS query timeout in seconds
/// Applied to every single TXT query. Most answers arrive in well under a second,
/// 3s keeps a whole domain check bounded by one slow branch rather than the sum.
pub const DNS_TIMEOUT_SECS: u64 = 3;

// Record names
/// Label prepended to the domain for the DMARC policy lookup (`_dmarc.<domain>`)
pub const DMARC_LABEL: &str = "_dmarc";
/// Label between the selector and the domain for DKIM key lookups
/// (`<selector>._domainkey.<domain>`)
pub const DKIM_LABEL: &str = "_domainkey";

// Record version tokens
/// A DMARC record must begin with this token
pub const DMARC_PREFIX: &str = "v=DMARC1";
/// An SPF record must begin with this token
pub const SPF_PREFIX: &str = "v=spf1";
/// A DKIM key record must begin with this token
pub const DKIM_PREFIX: &str = "v=DKIM1";

/// Commonly used DKIM selector names.
///
/// The real selector is chosen by the domain's mail operator and is not
/// discoverable from the outside, so a check can only probe likely names.
/// Callers can substitute their own list via `Config::selectors` or `--selector`.
pub const DEFAULT_DKIM_SELECTORS: &[&str] =
    &["default", "google", "selector1", "selector2", "k1", "dkim"];

// Bulk checking
/// Maximum number of domains accepted by a single bulk check
pub const MAX_BULK_DOMAINS: usize = 50;
/// Number of domains checked at the same time during a bulk check
/// Each domain already fans out into 2 + selector-count queries
pub const BULK_CONCURRENCY: usize = 5;

// Security score weights
pub const SCORE_DMARC_VALID: u8 = 40;
pub const SCORE_DMARC_INVALID: u8 = 10;
pub const SCORE_SPF_VALID: u8 = 30;
pub const SCORE_SPF_INVALID: u8 = 10;
pub const SCORE_DKIM_VALID: u8 = 30;

// HTTP status codes used by the response bodies
pub const HTTP_STATUS_BAD_REQUEST: u16 = 400;
pub const HTTP_STATUS_INTERNAL_SERVER_ERROR: u16 = 500;
