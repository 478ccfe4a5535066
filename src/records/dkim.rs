//! DKIM selector probing.
//!
//! A DKIM selector is chosen by the mail operator and cannot be listed from
//! outside, so the check probes a list of likely selector names. Each probe is
//! its own task and a failed probe only affects its own entry.

use std::time::Duration;

use futures::future::join_all;
use log::{debug, error};

use crate::dns::TxtResolver;
use crate::error_handling::ErrorType;
use crate::records::classify::classify;
use crate::records::types::{DkimSelectorResult, RecordKind, RecordStatus};

/// Probes every selector in `selectors` concurrently.
///
/// The output has one entry per selector, in the order of `selectors`,
/// whatever order the probes finish in. A probe that times out, fails or whose
/// task dies is reported as `not found`.
pub async fn probe_selectors<R: TxtResolver>(
    resolver: &R,
    domain: &str,
    selectors: &[String],
    timeout: Duration,
) -> Vec<DkimSelectorResult> {
    let handles: Vec<_> = selectors
        .iter()
        .map(|selector| {
            let resolver = resolver.clone();
            let domain = domain.to_string();
            let kind = RecordKind::dkim(selector.as_str());
            tokio::spawn(async move { classify(&resolver, &domain, &kind, timeout).await.status() })
        })
        .collect();

    let results: Vec<DkimSelectorResult> = selectors
        .iter()
        .zip(join_all(handles).await)
        .map(|(selector, joined)| {
            let status = joined.unwrap_or_else(|e| {
                error!(
                    "{}: DKIM probe for selector {} on {} died: {}",
                    ErrorType::TaskFailure,
                    selector,
                    domain,
                    e
                );
                RecordStatus::NotFound
            });
            DkimSelectorResult {
                selector: selector.clone(),
                status,
            }
        })
        .collect();

    debug!(
        "Probed {} DKIM selectors on {}, {} found",
        results.len(),
        domain,
        found_selectors(&results).count()
    );
    results
}

/// Selectors whose key record was found, in probe order.
pub fn found_selectors(
    results: &[DkimSelectorResult],
) -> impl Iterator<Item = &DkimSelectorResult> + '_ {
    results.iter().filter(|r| r.status == RecordStatus::Valid)
}

/// Folds per-selector statuses into one DKIM status.
///
/// `valid` if any selector is valid, `invalid` if any selector published a
/// record without the DKIM prefix, `not found` otherwise.
pub fn summarize_selectors(results: &[DkimSelectorResult]) -> RecordStatus {
    if results.iter().any(|r| r.status == RecordStatus::Valid) {
        RecordStatus::Valid
    } else if results.iter().any(|r| r.status == RecordStatus::Invalid) {
        RecordStatus::Invalid
    } else {
        RecordStatus::NotFound
    }
}
