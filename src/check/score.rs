//! Security score.

use crate::check::domain::DomainCheckResult;
use crate::config::{
    SCORE_DKIM_VALID, SCORE_DMARC_INVALID, SCORE_DMARC_VALID, SCORE_SPF_INVALID, SCORE_SPF_VALID,
};
use crate::records::RecordStatus;

/// Scores a domain from 0 to 100.
///
/// DMARC counts 40 when valid and 10 when published but invalid, SPF 30 and
/// 10, DKIM 30 when at least one selector is valid.
pub fn security_score(result: &DomainCheckResult) -> u8 {
    let dmarc = match result.dmarc.status() {
        RecordStatus::Valid => SCORE_DMARC_VALID,
        RecordStatus::Invalid => SCORE_DMARC_INVALID,
        RecordStatus::NotFound => 0,
    };
    let spf = match result.spf.status() {
        RecordStatus::Valid => SCORE_SPF_VALID,
        RecordStatus::Invalid => SCORE_SPF_INVALID,
        RecordStatus::NotFound => 0,
    };
    let dkim = if result.dkim_status() == RecordStatus::Valid {
        SCORE_DKIM_VALID
    } else {
        0
    };
    dmarc + spf + dkim
}
