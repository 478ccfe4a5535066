//! Checking several domains in one go.

use std::sync::Arc;

use futures::future::join_all;
use log::{error, info};
use tokio::sync::Semaphore;

use crate::check::domain::{DomainCheckResult, DomainChecker};
use crate::config::MAX_BULK_DOMAINS;
use crate::dns::TxtResolver;
use crate::error_handling::{BulkCheckError, CheckError, ErrorType};

/// Outcome of one domain in a bulk check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkCheckRow {
    /// The domain as given in the input
    pub domain: String,
    pub result: Result<DomainCheckResult, CheckError>,
}

/// Splits free text into domains.
///
/// Entries may be separated by newlines, commas or semicolons. Entries are
/// trimmed; empty entries and entries without a `.` are dropped. Order and
/// duplicates are kept.
///
/// # Examples
///
/// ```
/// use dmarc_checker::check::parse_domain_list;
///
/// let domains = parse_domain_list("example.com, example.org\nlocalhost;");
/// assert_eq!(domains, vec!["example.com", "example.org"]);
/// ```
pub fn parse_domain_list(text: &str) -> Vec<String> {
    text.split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && entry.contains('.'))
        .map(str::to_string)
        .collect()
}

/// Checks every domain in `domains`, at most `concurrency` at a time.
///
/// Rows come back in input order. A domain that cannot be checked (empty after
/// trimming, or its task died) gets an error row and the rest of the batch
/// carries on.
///
/// # Errors
///
/// Rejects the whole batch when `domains` is empty or longer than
/// `MAX_BULK_DOMAINS`.
pub async fn check_domains<R: TxtResolver>(
    checker: &DomainChecker<R>,
    domains: &[String],
    concurrency: usize,
) -> Result<Vec<BulkCheckRow>, BulkCheckError> {
    if domains.is_empty() {
        return Err(BulkCheckError::NoDomains);
    }
    if domains.len() > MAX_BULK_DOMAINS {
        return Err(BulkCheckError::TooManyDomains {
            count: domains.len(),
            max: MAX_BULK_DOMAINS,
        });
    }

    info!(
        "Checking {} domains, {} at a time",
        domains.len(),
        concurrency.max(1)
    );
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    let handles: Vec<_> = domains
        .iter()
        .map(|domain| {
            let checker = checker.clone();
            let semaphore = Arc::clone(&semaphore);
            let domain = domain.clone();
            tokio::spawn(async move {
                // The semaphore is never closed
                let _permit = semaphore.acquire_owned().await.ok();
                checker.check_domain(&domain).await
            })
        })
        .collect();

    let rows = domains
        .iter()
        .zip(join_all(handles).await)
        .map(|(domain, joined)| {
            let result = joined.unwrap_or_else(|e| {
                error!("{}: check of {domain} died: {e}", ErrorType::TaskFailure);
                Err(CheckError::Internal(e.to_string()))
            });
            BulkCheckRow {
                domain: domain.clone(),
                result,
            }
        })
        .collect();
    Ok(rows)
}
