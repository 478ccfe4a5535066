//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, record prefixes, selector candidates)
//! - Library configuration types
//! - CLI option parsing

mod cli;
mod constants;
mod types;

// Re-export public API
pub use cli::Opt;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, NameserverChoice, OutputFormat};
