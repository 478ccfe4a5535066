//! DMARC tag explanations.

use serde::Serialize;
use strum_macros::Display;

use super::{parse_tags, DmarcTag};

/// Reference table of the DMARC tags a record may carry.
pub const DMARC_TAG_REFERENCE: &[(&str, &str)] = &[
    ("v", "Version tag. Must be \"DMARC1\". Record is ignored if incorrect or missing."),
    ("p", "Policy for the domain. Values: \"none\" (no action), \"quarantine\" (mark as suspicious), \"reject\" (block)."),
    ("rua", "URI for aggregate report delivery. Optional, but necessary for receiving reports."),
    ("ruf", "URI for forensic report delivery. Optional, but necessary for receiving failure reports."),
    ("sp", "Policy for subdomains. Inherits from \"p\" if not specified. Values same as \"p\"."),
    ("adkim", "DKIM alignment. \"r\" (relaxed, default) allows partial match, \"s\" (strict) requires exact match."),
    ("aspf", "SPF alignment. \"r\" (relaxed, default) allows partial match, \"s\" (strict) requires exact match."),
    ("fo", "Forensic reporting options. Values: \"0\" (default), \"1\", \"d\", \"s\". Affects when reports are generated."),
    ("rf", "Reporting format for failure reports. Values: \"afrf\", \"iodef\"."),
    ("pct", "Percentage of messages subject to filtering. Applies to \"quarantine\" or \"reject\" policies."),
    ("ri", "Reporting interval in seconds. Default is 86400 (daily). Actual delivery may vary."),
];

const POLICIES: &[&str] = &["none", "quarantine", "reject"];

/// How a tag value looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Assessment {
    Good,
    Warning,
    Info,
}

/// Explanation of one tag, or of a required tag that is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFinding {
    pub tag: String,
    pub label: String,
    pub value: String,
    pub description: String,
    pub assessment: Assessment,
}

/// Explained breakdown of a DMARC record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DmarcAnalysis {
    pub findings: Vec<TagFinding>,
    #[serde(skip)]
    tags: Vec<DmarcTag>,
}

impl DmarcAnalysis {
    /// Value of the first `p` tag.
    pub fn policy(&self) -> Option<&str> {
        self.first_value("p")
    }

    /// Policy that applies to subdomains: `sp` when present, otherwise `p`.
    pub fn subdomain_policy(&self) -> Option<&str> {
        self.first_value("sp").or_else(|| self.policy())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &TagFinding> + '_ {
        self.findings
            .iter()
            .filter(|f| f.assessment == Assessment::Warning)
    }

    fn first_value(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }
}

/// Explains every tag of `raw` and flags missing required tags.
///
/// A missing `v` tag adds a leading warning, a missing `p` tag a trailing one.
pub fn analyze_dmarc(raw: &str) -> DmarcAnalysis {
    let tags = parse_tags(raw);
    let mut findings: Vec<TagFinding> = tags.iter().map(explain_tag).collect();

    if !tags.iter().any(|t| t.key == "v") {
        findings.insert(
            0,
            missing("v", "Version tag is required! Should be v=DMARC1"),
        );
    }
    if !tags.iter().any(|t| t.key == "p") {
        findings.push(missing(
            "p",
            "Policy tag is required! Should be p=none, p=quarantine, or p=reject",
        ));
    }

    DmarcAnalysis { findings, tags }
}

fn missing(tag: &str, description: &str) -> TagFinding {
    TagFinding {
        tag: tag.to_string(),
        label: format!("Missing: {tag}"),
        value: String::new(),
        description: description.to_string(),
        assessment: Assessment::Warning,
    }
}

fn explain_tag(tag: &DmarcTag) -> TagFinding {
    let value = tag.value.as_str();
    let (label, description, assessment) = match tag.key.as_str() {
        "v" if value == "DMARC1" => (
            "v (Version)",
            "Correct version identifier".to_string(),
            Assessment::Good,
        ),
        "v" => (
            "v (Version)",
            "Invalid version - should be DMARC1".to_string(),
            Assessment::Warning,
        ),
        "p" => {
            let description = match value {
                "none" => "Monitoring only - no action taken on failed emails. Good for initial deployment.",
                "quarantine" => "Failed emails sent to spam. Recommended after monitoring period.",
                "reject" => "Failed emails blocked entirely. Strongest protection, use with caution.",
                _ => "Invalid policy value",
            };
            ("p (Policy)", description.to_string(), policy_assessment(value))
        }
        "sp" => {
            let description = match value {
                "none" => "Subdomains: Monitoring only",
                "quarantine" => "Subdomains: Failed emails sent to spam",
                "reject" => "Subdomains: Failed emails blocked",
                _ => "Invalid subdomain policy",
            };
            (
                "sp (Subdomain Policy)",
                description.to_string(),
                policy_assessment(value),
            )
        }
        "rua" => (
            "rua (Aggregate Reports)",
            format!("Aggregate reports sent to: {value}. You'll receive daily summaries of authentication results."),
            mailto_assessment(value),
        ),
        "ruf" => (
            "ruf (Forensic Reports)",
            format!("Forensic reports sent to: {value}. Individual failure reports (can be high volume)."),
            mailto_assessment(value),
        ),
        "pct" => {
            let (description, assessment) = match value.parse::<u32>() {
                Ok(100) => (
                    format!("Policy applied to {value}% of emails. Policy applied to all emails."),
                    Assessment::Good,
                ),
                Ok(pct) if pct < 100 => (
                    format!("Policy applied to {value}% of emails. Consider increasing to 100 after testing."),
                    Assessment::Info,
                ),
                _ => (
                    format!("Invalid percentage \"{value}\" - must be a number from 0 to 100"),
                    Assessment::Warning,
                ),
            };
            ("pct (Percentage)", description, assessment)
        }
        "adkim" => (
            "adkim (DKIM Alignment)",
            alignment_description("DKIM", value),
            Assessment::Info,
        ),
        "aspf" => (
            "aspf (SPF Alignment)",
            alignment_description("SPF", value),
            Assessment::Info,
        ),
        "fo" => {
            let description = match value {
                "0" => "Generate report if both SPF and DKIM fail",
                "1" => "Generate report if either SPF or DKIM fails",
                "d" => "Generate report if DKIM fails",
                "s" => "Generate report if SPF fails",
                _ => "Forensic options set",
            };
            ("fo (Forensic Options)", description.to_string(), Assessment::Info)
        }
        "rf" => (
            "rf (Report Format)",
            format!("Report format: {value} (usually 'afrf' for Auth Failure Reporting Format)"),
            Assessment::Info,
        ),
        "ri" => {
            let description = match value.parse::<u64>() {
                Ok(seconds) => format!(
                    "Reports sent every {} seconds ({} hours)",
                    seconds,
                    (seconds + 1800) / 3600
                ),
                Err(_) => format!("Reporting interval set to {value}"),
            };
            ("ri (Report Interval)", description, Assessment::Info)
        }
        _ => ("", "Unknown or custom tag".to_string(), Assessment::Info),
    };

    TagFinding {
        tag: tag.key.clone(),
        label: if label.is_empty() {
            tag.key.clone()
        } else {
            label.to_string()
        },
        value: tag.value.clone(),
        description,
        assessment,
    }
}

fn policy_assessment(value: &str) -> Assessment {
    if POLICIES.contains(&value) {
        Assessment::Good
    } else {
        Assessment::Warning
    }
}

fn mailto_assessment(value: &str) -> Assessment {
    if value.contains("mailto:") {
        Assessment::Good
    } else {
        Assessment::Warning
    }
}

fn alignment_description(mechanism: &str, value: &str) -> String {
    if value == "s" {
        format!("Strict alignment - {mechanism} domain must exactly match From domain")
    } else {
        format!("Relaxed alignment - {mechanism} can be on subdomain (default)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding<'a>(analysis: &'a DmarcAnalysis, tag: &str) -> &'a TagFinding {
        analysis
            .findings
            .iter()
            .find(|f| f.tag == tag)
            .unwrap_or_else(|| panic!("no finding for {tag}"))
    }

    #[test]
    fn test_strict_record_is_all_good() {
        let analysis = analyze_dmarc(
            "v=DMARC1; p=reject; sp=reject; rua=mailto:dmarc@example.com; pct=100",
        );
        assert_eq!(analysis.findings.len(), 5);
        assert_eq!(analysis.warnings().count(), 0);
        assert_eq!(finding(&analysis, "v").label, "v (Version)");
        assert_eq!(finding(&analysis, "p").assessment, Assessment::Good);
        assert_eq!(finding(&analysis, "pct").assessment, Assessment::Good);
    }

    #[test]
    fn test_bad_values_are_warnings() {
        let analysis = analyze_dmarc("v=DMARC2; p=block; rua=https://example.com/report");
        assert_eq!(finding(&analysis, "v").assessment, Assessment::Warning);
        assert_eq!(finding(&analysis, "p").description, "Invalid policy value");
        assert_eq!(finding(&analysis, "rua").assessment, Assessment::Warning);
        assert_eq!(analysis.warnings().count(), 3);
    }

    #[test]
    fn test_missing_required_tags() {
        let analysis = analyze_dmarc("rua=mailto:a@b.com; pct=50");
        let first = analysis.findings.first().unwrap();
        let last = analysis.findings.last().unwrap();
        assert_eq!(first.label, "Missing: v");
        assert_eq!(last.label, "Missing: p");
        assert_eq!(finding(&analysis, "pct").assessment, Assessment::Info);
    }

    #[test]
    fn test_pct_tag_does_not_count_as_policy() {
        let analysis = analyze_dmarc("v=DMARC1; pct=100");
        assert_eq!(analysis.findings.last().unwrap().label, "Missing: p");
        assert_eq!(analysis.policy(), None);
    }

    #[test]
    fn test_subdomain_policy_inherits_from_p() {
        assert_eq!(
            analyze_dmarc("v=DMARC1; p=quarantine").subdomain_policy(),
            Some("quarantine")
        );
        assert_eq!(
            analyze_dmarc("v=DMARC1; p=quarantine; sp=none").subdomain_policy(),
            Some("none")
        );
    }

    #[test]
    fn test_informational_tags() {
        let analysis = analyze_dmarc("v=DMARC1; p=none; adkim=s; aspf=r; fo=1; rf=afrf; ri=86400; x-custom=1");
        assert!(finding(&analysis, "adkim").description.starts_with("Strict alignment"));
        assert!(finding(&analysis, "aspf").description.starts_with("Relaxed alignment"));
        assert_eq!(
            finding(&analysis, "fo").description,
            "Generate report if either SPF or DKIM fails"
        );
        assert_eq!(
            finding(&analysis, "ri").description,
            "Reports sent every 86400 seconds (24 hours)"
        );
        let custom = finding(&analysis, "x-custom");
        assert_eq!(custom.label, "x-custom");
        assert_eq!(custom.description, "Unknown or custom tag");
    }

    #[test]
    fn test_invalid_pct_is_warning() {
        let analysis = analyze_dmarc("v=DMARC1; p=none; pct=abc");
        assert_eq!(finding(&analysis, "pct").assessment, Assessment::Warning);
    }

    #[test]
    fn test_reference_covers_known_tags() {
        let keys: Vec<&str> = DMARC_TAG_REFERENCE.iter().map(|(k, _)| *k).collect();
        for key in ["v", "p", "sp", "rua", "ruf", "adkim", "aspf", "fo", "rf", "pct", "ri"] {
            assert!(keys.contains(&key), "{key} should be documented");
        }
    }
}
