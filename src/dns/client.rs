//! TXT lookup abstraction.
//!
//! Record checks talk to DNS only through the `TxtResolver` trait so a stub
//! resolver can stand in for the network in tests.

use std::future::Future;
use std::time::Duration;

use crate::error_handling::LookupError;

/// Resolves a DNS name to the TXT records published there.
///
/// Implementations return every TXT record at `name`, in the order the
/// upstream answer lists them, with multi-string records already concatenated
/// into one string. An absent name or an empty answer is
/// `LookupError::NotFound`; transport failures are `Timeout` or `Query`.
///
/// Implementations must not retry and must not cache.
pub trait TxtResolver: Clone + Send + Sync + 'static {
    fn lookup_txt(&self, name: &str)
        -> impl Future<Output = Result<Vec<String>, LookupError>> + Send;
}

/// Looks up TXT records at `name`, giving up after `timeout`.
///
/// The timeout is enforced here regardless of the resolver implementation so a
/// stalled query costs at most `timeout` and never delays sibling queries.
pub async fn lookup_txt_with_timeout<R: TxtResolver>(
    resolver: &R,
    name: &str,
    timeout: Duration,
) -> Result<Vec<String>, LookupError> {
    match tokio::time::timeout(timeout, resolver.lookup_txt(name)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout(name.to_string())),
    }
}
