//! Domain check orchestration.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};

use crate::config::Config;
use crate::dns::{DnsTxtClient, TxtResolver};
use crate::error_handling::{CheckError, ErrorType, InitializationError};
use crate::records::{
    analyze_dmarc, classify, found_selectors, parse_tags, probe_selectors, summarize_selectors,
    DkimSelectorResult, DmarcAnalysis, DmarcTag, RecordCheckResult, RecordKind, RecordStatus,
};

/// Everything found for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheckResult {
    /// The domain as queried (normalized)
    pub domain: String,
    pub dmarc: RecordCheckResult,
    pub spf: RecordCheckResult,
    /// One entry per probed selector, in probe order
    pub dkim: Vec<DkimSelectorResult>,
}

impl DomainCheckResult {
    /// Probed selectors whose key record was found.
    pub fn found_selectors(&self) -> impl Iterator<Item = &DkimSelectorResult> + '_ {
        found_selectors(&self.dkim)
    }

    /// DKIM status across all probed selectors.
    pub fn dkim_status(&self) -> RecordStatus {
        summarize_selectors(&self.dkim)
    }

    /// Tags of the DMARC record. Empty when no DMARC record was found.
    pub fn dmarc_tags(&self) -> Vec<DmarcTag> {
        self.dmarc.raw().map(parse_tags).unwrap_or_default()
    }

    pub fn dmarc_analysis(&self) -> Option<DmarcAnalysis> {
        self.dmarc.raw().map(analyze_dmarc)
    }
}

/// Checks domains for DMARC, SPF and DKIM records.
///
/// Generic over the TXT resolver so tests can run it against a stub. Cloning
/// is cheap and clones share the resolver.
#[derive(Clone)]
pub struct DomainChecker<R: TxtResolver> {
    resolver: R,
    selectors: Arc<[String]>,
    timeout: Duration,
}

impl DomainChecker<DnsTxtClient> {
    /// Builds a checker that queries the nameservers chosen in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver configuration cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(DnsTxtClient::from_config(config)?, config))
    }
}

impl<R: TxtResolver> DomainChecker<R> {
    pub fn new(resolver: R, config: &Config) -> Self {
        Self {
            resolver,
            selectors: config.selectors.iter().cloned().collect(),
            timeout: config.dns_timeout,
        }
    }

    /// Checks the DMARC, SPF and DKIM records of `domain`.
    ///
    /// The three checks run as separate tasks and the call takes as long as
    /// the slowest of them. DNS failures never fail the call: they show up as
    /// `not found` on the affected record. A sub-check whose task panics is
    /// reported as `not found` (every selector `not found` for DKIM) and the
    /// other sub-checks are still returned.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidInput` for an empty or whitespace-only
    /// domain, before any DNS query is sent.
    pub async fn check_domain(&self, domain: &str) -> Result<DomainCheckResult, CheckError> {
        let Some(domain) = normalize_domain(domain) else {
            debug!("{}: empty domain", ErrorType::InvalidInput);
            return Err(CheckError::InvalidInput);
        };
        info!("Checking {domain}");

        let timeout = self.timeout;
        let dmarc_task = tokio::spawn({
            let resolver = self.resolver.clone();
            let domain = domain.clone();
            async move { classify(&resolver, &domain, &RecordKind::Dmarc, timeout).await }
        });
        let spf_task = tokio::spawn({
            let resolver = self.resolver.clone();
            let domain = domain.clone();
            async move { classify(&resolver, &domain, &RecordKind::Spf, timeout).await }
        });
        let dkim_task = tokio::spawn({
            let resolver = self.resolver.clone();
            let domain = domain.clone();
            let selectors = Arc::clone(&self.selectors);
            async move { probe_selectors(&resolver, &domain, &selectors, timeout).await }
        });

        let (dmarc, spf, dkim) = tokio::join!(dmarc_task, spf_task, dkim_task);

        let dmarc = dmarc.unwrap_or_else(|e| {
            error!("{}: DMARC check for {domain} died: {e}", ErrorType::TaskFailure);
            RecordCheckResult::not_found()
        });
        let spf = spf.unwrap_or_else(|e| {
            error!("{}: SPF check for {domain} died: {e}", ErrorType::TaskFailure);
            RecordCheckResult::not_found()
        });
        let dkim = dkim.unwrap_or_else(|e| {
            error!("{}: DKIM probe for {domain} died: {e}", ErrorType::TaskFailure);
            self.selectors
                .iter()
                .map(|selector| DkimSelectorResult {
                    selector: selector.clone(),
                    status: RecordStatus::NotFound,
                })
                .collect()
        });

        let result = DomainCheckResult {
            domain,
            dmarc,
            spf,
            dkim,
        };
        info!(
            "{}: DMARC {}, SPF {}, DKIM {} ({} selector(s) found)",
            result.domain,
            result.dmarc.status(),
            result.spf.status(),
            result.dkim_status(),
            result.found_selectors().count()
        );
        Ok(result)
    }
}

/// Normalizes user input into the domain that is queried.
///
/// Trims surrounding whitespace, drops a trailing root dot and lowercases.
/// Returns `None` when nothing is left. No further syntax check is made: a
/// malformed domain simply finds nothing in DNS.
pub fn normalize_domain(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed).trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("example.com"), Some("example.com".into()));
        assert_eq!(normalize_domain("  Example.COM \n"), Some("example.com".into()));
        assert_eq!(normalize_domain("example.com."), Some("example.com".into()));
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain(" \t "), None);
        assert_eq!(normalize_domain("."), None);
    }

    #[test]
    fn test_dmarc_tags_empty_without_record() {
        let result = DomainCheckResult {
            domain: "example.com".into(),
            dmarc: RecordCheckResult::not_found(),
            spf: RecordCheckResult::not_found(),
            dkim: Vec::new(),
        };
        assert!(result.dmarc_tags().is_empty());
        assert!(result.dmarc_analysis().is_none());
        assert_eq!(result.dkim_status(), RecordStatus::NotFound);
    }

    #[test]
    fn test_dmarc_tags_from_invalid_record() {
        let result = DomainCheckResult {
            domain: "example.com".into(),
            dmarc: RecordCheckResult::invalid("p=none; rua=mailto:a@b.com"),
            spf: RecordCheckResult::valid("v=spf1 -all"),
            dkim: Vec::new(),
        };
        let tags = result.dmarc_tags();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], DmarcTag::new("p", "none"));
    }
}
