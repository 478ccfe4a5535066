//! Command-line options.

use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;
use strum::VariantNames;

use crate::config::types::{Config, LogFormat, LogLevel, NameserverChoice, OutputFormat};

/// Command-line options for the `dmarc_checker` binary.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "dmarc_checker",
    about = "Checks whether a domain publishes valid DMARC, SPF and DKIM records."
)]
pub struct Opt {
    /// Domains to check
    #[structopt(name = "DOMAIN")]
    pub domains: Vec<String>,

    /// File with domains separated by newlines, commas or semicolons
    #[structopt(short, long, parse(from_os_str))]
    pub file: Option<PathBuf>,

    /// DKIM selector to probe (repeatable). Replaces the built-in candidate list
    #[structopt(short = "s", long = "selector", number_of_values = 1)]
    pub selectors: Vec<String>,

    /// Timeout for each DNS query, in seconds (at least 1)
    #[structopt(long, default_value = "3")]
    pub timeout_secs: u64,

    /// Upstream nameservers
    #[structopt(
        long,
        default_value = "system",
        possible_values = NameserverChoice::VARIANTS,
        case_insensitive = true
    )]
    pub nameserver: NameserverChoice,

    /// Output format
    #[structopt(
        long,
        default_value = "plain",
        possible_values = OutputFormat::VARIANTS,
        case_insensitive = true
    )]
    pub format: OutputFormat,

    /// Number of domains checked at the same time when several are given
    #[structopt(long, default_value = "5")]
    pub concurrency: usize,

    /// Log level
    #[structopt(
        long,
        default_value = "info",
        possible_values = LogLevel::VARIANTS,
        case_insensitive = true
    )]
    pub log_level: LogLevel,

    /// Log format
    #[structopt(
        long,
        default_value = "plain",
        possible_values = LogFormat::VARIANTS,
        case_insensitive = true
    )]
    pub log_format: LogFormat,

    /// List every probed DKIM selector, not only the ones found
    #[structopt(long)]
    pub all_selectors: bool,

    /// Break the DMARC record down into explained tags
    #[structopt(long)]
    pub explain: bool,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        let defaults = Config::default();
        Config {
            selectors: if opt.selectors.is_empty() {
                defaults.selectors
            } else {
                opt.selectors.clone()
            },
            dns_timeout: Duration::from_secs(opt.timeout_secs.max(1)),
            nameserver: opt.nameserver,
            bulk_concurrency: opt.concurrency.max(1),
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
