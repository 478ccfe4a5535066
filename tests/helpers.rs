// Shared test helpers: an in-memory TXT resolver and config builders.
//
// The stub resolver stands in for DNS so checks can be exercised without the
// network. It counts queries, records the names asked for and can be told to
// stall, fail or panic on particular names.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dmarc_checker::{Config, LookupError, TxtResolver};

#[derive(Clone, Default)]
pub struct StubResolver {
    records: Arc<HashMap<String, Vec<String>>>,
    stalled: Arc<HashSet<String>>,
    failing: Arc<HashSet<String>>,
    panicking: Arc<HashSet<String>>,
    delay: Option<Duration>,
    queries: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    queried: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes TXT records at `name`.
    pub fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        Arc::make_mut(&mut self.records)
            .insert(name.to_string(), records.iter().map(|r| r.to_string()).collect());
        self
    }

    /// Queries for `name` never complete.
    pub fn stall(mut self, name: &str) -> Self {
        Arc::make_mut(&mut self.stalled).insert(name.to_string());
        self
    }

    /// Queries for `name` fail with a transport error.
    pub fn fail(mut self, name: &str) -> Self {
        Arc::make_mut(&mut self.failing).insert(name.to_string());
        self
    }

    /// Queries for `name` panic.
    pub fn panic_on(mut self, name: &str) -> Self {
        Arc::make_mut(&mut self.panicking).insert(name.to_string());
        self
    }

    /// Every query takes `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.queried.lock().expect("queried lock poisoned").clone()
    }
}

impl TxtResolver for StubResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.queried
            .lock()
            .expect("queried lock poisoned")
            .push(name.to_string());

        if self.panicking.contains(name) {
            panic!("stub resolver asked to panic on {name}");
        }
        if self.stalled.contains(name) {
            std::future::pending::<()>().await;
        }

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(name) {
            return Err(LookupError::Query {
                name: name.to_string(),
                reason: "connection refused".to_string(),
            });
        }
        match self.records.get(name) {
            Some(records) if !records.is_empty() => Ok(records.clone()),
            _ => Err(LookupError::NotFound(name.to_string())),
        }
    }
}

/// Config probing `selectors` with a per-query `timeout`.
#[allow(dead_code)]
pub fn test_config(selectors: &[&str], timeout: Duration) -> Config {
    Config {
        selectors: selectors.iter().map(|s| s.to_string()).collect(),
        dns_timeout: timeout,
        ..Default::default()
    }
}
