//! Human-readable and JSON reports.

use colored::*;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::check::{
    security_score, BulkCheckRow, CheckDomainResponse, DomainCheckResult, ErrorResponse,
};
use crate::records::dmarc::Assessment;
use crate::records::{RecordCheckResult, RecordStatus};

/// What to include in a plain report besides the record statuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// List every probed selector instead of only the found ones
    pub all_selectors: bool,
    /// Break the DMARC record down into explained tags
    pub explain: bool,
}

fn colored_status(status: RecordStatus) -> ColoredString {
    let text = status.to_string();
    match status {
        RecordStatus::Valid => text.green(),
        RecordStatus::Invalid => text.yellow(),
        RecordStatus::NotFound => text.red(),
    }
}

fn push_record(out: &mut String, name: &str, record: &RecordCheckResult) {
    out.push_str(&format!("  {:<6} {}\n", name, colored_status(record.status())));
    if let Some(raw) = record.raw() {
        out.push_str(&format!("         {}\n", raw.dimmed()));
    }
}

/// Renders one domain as an indented, colored block.
pub fn render_domain_report(result: &DomainCheckResult, options: ReportOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}  security score {}/100\n",
        result.domain.bold(),
        security_score(result)
    ));

    push_record(&mut out, "DMARC", &result.dmarc);
    if options.explain {
        if let Some(analysis) = result.dmarc_analysis() {
            for finding in &analysis.findings {
                let marker = match finding.assessment {
                    Assessment::Good => "✔".green(),
                    Assessment::Warning => "⚠".yellow(),
                    Assessment::Info => "ℹ".blue(),
                };
                if finding.value.is_empty() {
                    out.push_str(&format!(
                        "           {} {}: {}\n",
                        marker, finding.label, finding.description
                    ));
                } else {
                    out.push_str(&format!(
                        "           {} {} = {}: {}\n",
                        marker, finding.label, finding.value, finding.description
                    ));
                }
            }
            if let Some(policy) = analysis.subdomain_policy() {
                out.push_str(&format!("           subdomain policy: {policy}\n"));
            }
        }
    }

    push_record(&mut out, "SPF", &result.spf);

    out.push_str(&format!("  {:<6} {}\n", "DKIM", colored_status(result.dkim_status())));
    if options.all_selectors {
        for selector in &result.dkim {
            out.push_str(&format!(
                "         {:<12} {}\n",
                selector.selector,
                colored_status(selector.status)
            ));
        }
    } else {
        let found: Vec<&str> = result
            .found_selectors()
            .map(|s| s.selector.as_str())
            .collect();
        if found.is_empty() {
            out.push_str(&format!(
                "         {}\n",
                "no key under the probed selectors; the domain may use another selector (--selector)"
                    .dimmed()
            ));
        } else {
            out.push_str(&format!("         selectors: {}\n", found.join(", ")));
        }
    }
    out
}

/// Renders a bulk check: one block per domain, then per-record status counts.
pub fn render_bulk_report(rows: &[BulkCheckRow], options: ReportOptions) -> String {
    let mut out = String::new();
    let checked: Vec<&DomainCheckResult> = rows
        .iter()
        .filter_map(|r| r.result.as_ref().ok())
        .collect();

    for row in rows {
        match &row.result {
            Ok(result) => out.push_str(&render_domain_report(result, options)),
            Err(e) => out.push_str(&format!("{}  {}\n", row.domain.bold(), e.to_string().red())),
        }
        out.push('\n');
    }

    out.push_str(&format!("Checked {} of {} domains\n", checked.len(), rows.len()));
    let columns: [(&str, fn(&DomainCheckResult) -> RecordStatus); 3] = [
        ("DMARC", |r| r.dmarc.status()),
        ("SPF", |r| r.spf.status()),
        ("DKIM", DomainCheckResult::dkim_status),
    ];
    for (name, status_of) in columns {
        let counts: Vec<String> = RecordStatus::iter()
            .map(|status| {
                let n = checked.iter().filter(|r| status_of(**r) == status).count();
                format!("{n} {status}")
            })
            .collect();
        out.push_str(&format!("  {:<6} {}\n", name, counts.join(", ")));
    }
    out
}

/// One element of the JSON array printed for several domains.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JsonRow {
    Checked {
        domain: String,
        #[serde(flatten)]
        body: CheckDomainResponse,
    },
    Failed {
        domain: String,
        #[serde(flatten)]
        body: ErrorResponse,
    },
}

impl From<&BulkCheckRow> for JsonRow {
    fn from(row: &BulkCheckRow) -> Self {
        match &row.result {
            Ok(result) => JsonRow::Checked {
                domain: result.domain.clone(),
                body: CheckDomainResponse::from(result),
            },
            Err(e) => JsonRow::Failed {
                domain: row.domain.clone(),
                body: ErrorResponse::from_check_error(e).1,
            },
        }
    }
}
