//! Configuration types.
//!
//! This module defines the enums and the library `Config` struct. The CLI
//! options in `cli.rs` are converted into a `Config`, but the library can be
//! configured programmatically without going through the CLI.

use std::time::Duration;

use strum_macros::{Display, EnumString, VariantNames};

use crate::config::constants::{BULK_CONCURRENCY, DEFAULT_DKIM_SELECTORS, DNS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Which upstream nameservers the DNS resolver talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NameserverChoice {
    /// Nameservers from the host's system configuration (`/etc/resolv.conf`)
    System,
    /// Google Public DNS (8.8.8.8, 8.8.4.4)
    Google,
    /// Cloudflare (1.1.1.1, 1.0.0.1)
    Cloudflare,
    /// Quad9 (9.9.9.9)
    Quad9,
}

/// How results are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Colored, human-readable report
    Plain,
    /// The check-domain response body as JSON
    Json,
    /// One CSV row per domain with a security score
    Csv,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dmarc_checker::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     selectors: vec!["s1".to_string(), "s2".to_string()],
///     dns_timeout: Duration::from_secs(2),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// DKIM selector names probed for every domain, in output order
    pub selectors: Vec<String>,

    /// Timeout applied to each individual TXT query
    pub dns_timeout: Duration,

    /// Upstream nameservers
    pub nameserver: NameserverChoice,

    /// Number of domains checked at the same time in bulk mode
    pub bulk_concurrency: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_DKIM_SELECTORS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            dns_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            nameserver: NameserverChoice::System,
            bulk_concurrency: BULK_CONCURRENCY,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
