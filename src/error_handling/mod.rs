//! Error handling.
//!
//! This module provides:
//! - Error type definitions
//! - Categorization of resolver and lookup errors
//!
//! Only `CheckError::InvalidInput` aborts a check. Lookup errors are contained
//! within their own record check and degrade to a record status:
//! - **Record absent** and **transport errors** become `not found`
//! - **Malformed records** become `invalid`

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_lookup_error, categorize_resolve_error};
pub use types::{BulkCheckError, CheckError, ErrorType, InitializationError, LookupError};
