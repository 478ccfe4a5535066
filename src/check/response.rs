//! JSON response bodies.
//!
//! Shapes served by `GET /api/check-domain?domain=<domain>`. The route itself
//! lives outside this crate; these types only fix the body format.

use serde::{Deserialize, Serialize};

use crate::check::domain::DomainCheckResult;
use crate::config::{HTTP_STATUS_BAD_REQUEST, HTTP_STATUS_INTERNAL_SERVER_ERROR};
use crate::error_handling::CheckError;
use crate::records::{DkimSelectorResult, RecordStatus};

/// Successful check body.
///
/// `dkimResults` lists only the selectors whose key record was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDomainResponse {
    pub dmarc: RecordStatus,
    pub dmarc_record: Option<String>,
    pub spf: RecordStatus,
    pub spf_record: Option<String>,
    pub dkim_results: Vec<DkimSelectorResult>,
}

impl From<&DomainCheckResult> for CheckDomainResponse {
    fn from(result: &DomainCheckResult) -> Self {
        Self {
            dmarc: result.dmarc.status(),
            dmarc_record: result.dmarc.raw().map(str::to_string),
            spf: result.spf.status(),
            spf_record: result.spf.raw().map(str::to_string),
            dkim_results: result.found_selectors().cloned().collect(),
        }
    }
}

/// Error body, `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// 400 body for a missing or empty domain.
    pub fn domain_required() -> Self {
        Self {
            error: "Domain is required".to_string(),
        }
    }

    /// 500 body for an unexpected failure.
    pub fn check_failed() -> Self {
        Self {
            error: "Failed to check domain".to_string(),
        }
    }

    /// HTTP status code and body for a failed check.
    pub fn from_check_error(err: &CheckError) -> (u16, Self) {
        match err {
            CheckError::InvalidInput => (HTTP_STATUS_BAD_REQUEST, Self::domain_required()),
            CheckError::Internal(_) => (HTTP_STATUS_INTERNAL_SERVER_ERROR, Self::check_failed()),
        }
    }
}
