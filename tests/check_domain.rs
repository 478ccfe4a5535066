//! Domain check behavior against a stub resolver.

use std::time::{Duration, Instant};

use dmarc_checker::{CheckDomainResponse, CheckError, DomainChecker, RecordStatus};

mod helpers;

use helpers::{test_config, StubResolver};

const TIMEOUT: Duration = Duration::from_millis(200);

fn checker(resolver: &StubResolver, selectors: &[&str]) -> DomainChecker<StubResolver> {
    DomainChecker::new(resolver.clone(), &test_config(selectors, TIMEOUT))
}

#[tokio::test]
async fn test_valid_dmarc_record_is_reported_verbatim() {
    let record = "v=DMARC1; p=reject; rua=mailto:dmarc@example.com";
    let resolver = StubResolver::new().with_txt("_dmarc.example.com", &[record]);

    let result = checker(&resolver, &[])
        .check_domain("example.com")
        .await
        .expect("Check should succeed");

    assert_eq!(result.dmarc.status(), RecordStatus::Valid);
    assert_eq!(result.dmarc.raw(), Some(record));
}

#[tokio::test]
async fn test_missing_dmarc_is_not_found() {
    let resolver = StubResolver::new().with_txt("example.com", &["v=spf1 -all"]);

    let result = checker(&resolver, &[])
        .check_domain("example.com")
        .await
        .expect("Check should succeed");

    assert_eq!(result.dmarc.status(), RecordStatus::NotFound);
    assert_eq!(result.dmarc.raw(), None);
    assert!(result.dmarc_tags().is_empty());
    assert_eq!(result.spf.status(), RecordStatus::Valid);
}

#[tokio::test]
async fn test_spf_among_other_txt_records() {
    let resolver = StubResolver::new().with_txt(
        "example.com",
        &[
            "google-site-verification=abc",
            "  v=spf1 include:_spf.google.com ~all  ",
        ],
    );

    let result = checker(&resolver, &[])
        .check_domain("example.com")
        .await
        .unwrap();

    assert_eq!(result.spf.status(), RecordStatus::Valid);
    assert_eq!(result.spf.raw(), Some("v=spf1 include:_spf.google.com ~all"));
}

#[tokio::test]
async fn test_non_matching_records_are_invalid() {
    let resolver = StubResolver::new()
        .with_txt("_dmarc.example.com", &["p=none; rua=mailto:a@b.com"])
        .with_txt("example.com", &["MS=ms123", "spf1 -all"]);

    let result = checker(&resolver, &[])
        .check_domain("example.com")
        .await
        .unwrap();

    assert_eq!(result.dmarc.status(), RecordStatus::Invalid);
    assert_eq!(result.dmarc.raw(), Some("p=none; rua=mailto:a@b.com"));
    assert_eq!(result.dmarc_tags().len(), 2);
    assert_eq!(result.spf.status(), RecordStatus::Invalid);
    assert_eq!(result.spf.raw(), Some("MS=ms123"));
}

#[tokio::test]
async fn test_selectors_reported_in_probe_order() {
    let resolver = StubResolver::new().with_txt(
        "google._domainkey.example.com",
        &["v=DKIM1; k=rsa; p=MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQ"],
    );

    let result = checker(&resolver, &["default", "google"])
        .check_domain("example.com")
        .await
        .unwrap();

    let statuses: Vec<(&str, RecordStatus)> = result
        .dkim
        .iter()
        .map(|r| (r.selector.as_str(), r.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("default", RecordStatus::NotFound),
            ("google", RecordStatus::Valid)
        ]
    );
    assert_eq!(result.dkim_status(), RecordStatus::Valid);
}

#[tokio::test]
async fn test_empty_domain_sends_no_queries() {
    let resolver = StubResolver::new();
    let checker = checker(&resolver, &["default", "google"]);

    assert_eq!(checker.check_domain("").await, Err(CheckError::InvalidInput));
    assert_eq!(checker.check_domain("  \t\n").await, Err(CheckError::InvalidInput));
    assert_eq!(resolver.query_count(), 0);
}

#[tokio::test]
async fn test_one_query_per_name() {
    let resolver = StubResolver::new();

    checker(&resolver, &["default", "google", "k1"])
        .check_domain("example.com")
        .await
        .unwrap();

    assert_eq!(resolver.query_count(), 5);
    let mut names = resolver.queried_names();
    names.sort();
    assert_eq!(
        names,
        vec![
            "_dmarc.example.com",
            "default._domainkey.example.com",
            "example.com",
            "google._domainkey.example.com",
            "k1._domainkey.example.com",
        ]
    );
}

#[tokio::test]
async fn test_domain_is_normalized_before_querying() {
    let resolver = StubResolver::new().with_txt("_dmarc.example.com", &["v=DMARC1; p=none"]);

    let result = checker(&resolver, &[])
        .check_domain("  Example.COM. ")
        .await
        .unwrap();

    assert_eq!(result.domain, "example.com");
    assert_eq!(result.dmarc.status(), RecordStatus::Valid);
}

#[tokio::test]
async fn test_stalled_spf_costs_one_timeout() {
    let resolver = StubResolver::new()
        .with_txt("_dmarc.example.com", &["v=DMARC1; p=quarantine"])
        .with_txt("default._domainkey.example.com", &["v=DKIM1; p=abc"])
        .stall("example.com");

    let start = Instant::now();
    let result = checker(&resolver, &["default"])
        .check_domain("example.com")
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(result.spf.status(), RecordStatus::NotFound);
    assert_eq!(result.dmarc.status(), RecordStatus::Valid);
    assert_eq!(result.dkim[0].status, RecordStatus::Valid);
    assert!(elapsed >= TIMEOUT, "Should wait for the SPF timeout");
    assert!(
        elapsed < TIMEOUT * 4,
        "Check took {elapsed:?}, expected roughly one timeout"
    );
}

#[tokio::test]
async fn test_stalled_selectors_time_out_concurrently() {
    let resolver = StubResolver::new()
        .stall("a._domainkey.example.com")
        .stall("b._domainkey.example.com")
        .stall("c._domainkey.example.com")
        .stall("d._domainkey.example.com");

    let start = Instant::now();
    let result = checker(&resolver, &["a", "b", "c", "d"])
        .check_domain("example.com")
        .await
        .unwrap();

    assert!(result.dkim.iter().all(|r| r.status == RecordStatus::NotFound));
    assert!(start.elapsed() < TIMEOUT * 4);
}

#[tokio::test]
async fn test_transport_error_is_not_found() {
    let resolver = StubResolver::new()
        .with_txt("example.com", &["v=spf1 -all"])
        .fail("_dmarc.example.com");

    let result = checker(&resolver, &[])
        .check_domain("example.com")
        .await
        .unwrap();

    assert_eq!(result.dmarc.status(), RecordStatus::NotFound);
    assert_eq!(result.spf.status(), RecordStatus::Valid);
}

#[tokio::test]
async fn test_panicking_dmarc_check_is_contained() {
    let resolver = StubResolver::new()
        .with_txt("example.com", &["v=spf1 -all"])
        .with_txt("default._domainkey.example.com", &["v=DKIM1; p=abc"])
        .panic_on("_dmarc.example.com");

    let result = checker(&resolver, &["default"])
        .check_domain("example.com")
        .await
        .expect("A panicking sub-check should not fail the whole check");

    assert_eq!(result.dmarc.status(), RecordStatus::NotFound);
    assert_eq!(result.spf.status(), RecordStatus::Valid);
    assert_eq!(result.dkim[0].status, RecordStatus::Valid);
}

#[tokio::test]
async fn test_panicking_selector_probe_is_contained() {
    let resolver = StubResolver::new()
        .with_txt("k1._domainkey.example.com", &["v=DKIM1; p=abc"])
        .panic_on("default._domainkey.example.com");

    let result = checker(&resolver, &["default", "k1"])
        .check_domain("example.com")
        .await
        .unwrap();

    assert_eq!(result.dkim.len(), 2);
    assert_eq!(result.dkim[0].status, RecordStatus::NotFound);
    assert_eq!(result.dkim[1].status, RecordStatus::Valid);
}

#[tokio::test]
async fn test_response_body_lists_found_selectors_only() {
    let resolver = StubResolver::new()
        .with_txt("_dmarc.example.com", &["v=DMARC1; p=none"])
        .with_txt("selector2._domainkey.example.com", &["v=DKIM1; p=abc"])
        .with_txt("k1._domainkey.example.com", &["not a key"]);

    let result = checker(&resolver, &["selector1", "selector2", "k1"])
        .check_domain("example.com")
        .await
        .unwrap();
    let body = serde_json::to_value(CheckDomainResponse::from(&result)).unwrap();

    assert_eq!(body["dmarc"], "valid");
    assert_eq!(body["dmarcRecord"], "v=DMARC1; p=none");
    assert_eq!(body["spf"], "not found");
    assert!(body["spfRecord"].is_null());
    assert_eq!(
        body["dkimResults"],
        serde_json::json!([{"selector": "selector2", "status": "valid"}])
    );
}
