//! Record kinds and check results.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::{DKIM_LABEL, DKIM_PREFIX, DMARC_LABEL, DMARC_PREFIX, SPF_PREFIX};

/// Outcome of checking one record.
///
/// Serialized as `"valid"`, `"invalid"` and `"not found"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum RecordStatus {
    /// A TXT record with the expected version prefix was found.
    #[serde(rename = "valid")]
    #[strum(serialize = "valid")]
    Valid,
    /// TXT records exist at the expected name but none has the expected prefix.
    #[serde(rename = "invalid")]
    #[strum(serialize = "invalid")]
    Invalid,
    /// No TXT record at the expected name, or the query failed.
    #[serde(rename = "not found")]
    #[strum(serialize = "not found")]
    NotFound,
}

/// Which record a check is about, and therefore which name is queried and
/// which version prefix is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// `_dmarc.<domain>`, prefix `v=DMARC1`
    Dmarc,
    /// `<domain>`, prefix `v=spf1`
    Spf,
    /// `<selector>._domainkey.<domain>`, prefix `v=DKIM1`
    Dkim { selector: String },
}

impl RecordKind {
    pub fn dkim(selector: impl Into<String>) -> Self {
        RecordKind::Dkim {
            selector: selector.into(),
        }
    }

    /// DNS name holding this record for `domain`.
    pub fn query_name(&self, domain: &str) -> String {
        match self {
            RecordKind::Dmarc => format!("{DMARC_LABEL}.{domain}"),
            RecordKind::Spf => domain.to_string(),
            RecordKind::Dkim { selector } => format!("{selector}.{DKIM_LABEL}.{domain}"),
        }
    }

    /// Version token a valid record starts with.
    pub fn prefix(&self) -> &'static str {
        match self {
            RecordKind::Dmarc => DMARC_PREFIX,
            RecordKind::Spf => SPF_PREFIX,
            RecordKind::Dkim { .. } => DKIM_PREFIX,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Dmarc => f.write_str("DMARC"),
            RecordKind::Spf => f.write_str("SPF"),
            RecordKind::Dkim { selector } => write!(f, "DKIM ({selector})"),
        }
    }
}

/// Status of one record plus the record content that produced it.
///
/// `raw` is present exactly when the status is not `NotFound`: the matching
/// record for `Valid`, the first record published at the name for `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCheckResult {
    status: RecordStatus,
    raw: Option<String>,
}

impl RecordCheckResult {
    pub fn valid(raw: impl Into<String>) -> Self {
        Self {
            status: RecordStatus::Valid,
            raw: Some(raw.into()),
        }
    }

    pub fn invalid(raw: impl Into<String>) -> Self {
        Self {
            status: RecordStatus::Invalid,
            raw: Some(raw.into()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: RecordStatus::NotFound,
            raw: None,
        }
    }

    pub fn status(&self) -> RecordStatus {
        self.status
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

/// Status of one probed DKIM selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DkimSelectorResult {
    pub selector: String,
    pub status: RecordStatus,
}
