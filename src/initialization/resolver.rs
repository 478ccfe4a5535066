//! DNS resolver initialization.
//!
//! This module provides the function that initializes the DNS resolver with
//! the configured nameservers and timeout.

use std::sync::Arc;

use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::system_conf::read_system_conf;
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::{Config, NameserverChoice};
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for TXT lookups.
///
/// The resolver is configured for single-shot queries:
/// - `timeout` from `Config::dns_timeout`
/// - one attempt per query, a failed query is reported as "not found" upstream
/// - `ndots = 0` so names are never expanded with search domains
/// - no answer cache, every check sees what is currently published
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the system resolver
/// configuration is requested but cannot be read.
pub fn init_resolver(config: &Config) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let (resolver_config, mut opts) = match config.nameserver {
        NameserverChoice::System => read_system_conf()
            .map_err(|e| InitializationError::DnsResolverError(e.to_string()))?,
        NameserverChoice::Google => (ResolverConfig::google(), ResolverOpts::default()),
        NameserverChoice::Cloudflare => (ResolverConfig::cloudflare(), ResolverOpts::default()),
        NameserverChoice::Quad9 => (ResolverConfig::quad9(), ResolverOpts::default()),
    };

    opts.timeout = config.dns_timeout;
    opts.attempts = 1;
    opts.ndots = 0;
    opts.cache_size = 0;

    log::debug!(
        "Initializing DNS resolver ({} nameservers, timeout {:?})",
        config.nameserver,
        config.dns_timeout
    );

    Ok(Arc::new(TokioAsyncResolver::tokio(resolver_config, opts)))
}
