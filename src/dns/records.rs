//! TXT record queries over the network.
//!
//! `DnsTxtClient` implements `TxtResolver` on top of `trust-dns-resolver`.

use std::sync::Arc;

use trust_dns_resolver::proto::rr::rdata::TXT;
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::dns::client::TxtResolver;
use crate::error_handling::{categorize_resolve_error, InitializationError, LookupError};
use crate::initialization::init_resolver;

/// TXT client backed by a shared `TokioAsyncResolver`.
///
/// Cloning is cheap: clones share the same resolver.
#[derive(Clone)]
pub struct DnsTxtClient {
    resolver: Arc<TokioAsyncResolver>,
}

impl DnsTxtClient {
    /// Wraps an already configured resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }

    /// Builds a resolver from `config` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver configuration cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(init_resolver(config)?))
    }
}

impl TxtResolver for DnsTxtClient {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let fqdn = into_fqdn(name);
        log::debug!("Querying TXT records at {fqdn}");
        match self.resolver.txt_lookup(fqdn.as_str()).await {
            Ok(lookup) => {
                let txt_records: Vec<String> = lookup.iter().map(txt_to_string).collect();
                if txt_records.is_empty() {
                    Err(LookupError::NotFound(name.to_string()))
                } else {
                    Ok(txt_records)
                }
            }
            Err(e) => Err(categorize_resolve_error(name, &e)),
        }
    }
}

/// Joins the character-strings of one TXT record into a single string.
///
/// A record longer than 255 bytes is published as several character-strings.
/// Bytes that are not UTF-8 are replaced with U+FFFD.
pub(crate) fn txt_to_string(txt: &TXT) -> String {
    txt.iter()
        .map(|bytes| String::from_utf8_lossy(bytes))
        .collect()
}

/// Makes `name` absolute so the resolver never appends search domains.
pub(crate) fn into_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
