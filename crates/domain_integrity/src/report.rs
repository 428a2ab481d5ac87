//! Report-row flattening
//!
//! The external reporting collaborator consumes verdicts; these helpers
//! flatten them into one serializable row per finding, the shape a CSV or
//! review table wants.

use serde::Serialize;

use crate::verdict::Verdict;

/// One report row: a single finding with its claim context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingRecord {
    /// Claim the finding was raised on
    pub claim_id: String,
    /// Stable rule identifier
    pub rule_id: &'static str,
    /// Severity label (`ERROR`, `WARNING`, `INFO`)
    pub severity: String,
    /// Human-readable explanation
    pub message: String,
}

/// Flattens verdicts into report rows, preserving verdict and finding order
pub fn finding_records(verdicts: &[Verdict]) -> Vec<FindingRecord> {
    verdicts
        .iter()
        .flat_map(|verdict| {
            verdict.findings.iter().map(|finding| FindingRecord {
                claim_id: finding.claim_id.to_string(),
                rule_id: finding.rule_id.as_str(),
                severity: finding.severity.to_string(),
                message: finding.message.clone(),
            })
        })
        .collect()
}
