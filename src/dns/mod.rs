//! DNS TXT lookups.
//!
//! This module provides:
//! - The `TxtResolver` trait every record check queries through
//! - `DnsTxtClient`, the `trust-dns-resolver` implementation
//! - A per-query timeout wrapper
//! - Prefix-based record extraction from TXT record sets
//!
//! There is no caching and no retry: each name is queried once per check.

mod client;
mod extract;
mod records;

// Re-export public API
pub use client::{lookup_txt_with_timeout, TxtResolver};
pub use extract::extract_record_with_prefix;
pub use records::DnsTxtClient;
