//! Per-claim verdict

use serde::Serialize;

use core_kernel::ClaimId;

use crate::finding::{Finding, Severity};

/// The complete validation outcome for one claim
///
/// Findings appear in rule-registration order. A verdict is created by the
/// engine, returned to the caller, and never mutated thereafter; equality is
/// structural so reproducibility can be asserted bit-for-bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Claim the verdict was produced for
    pub claim_id: ClaimId,
    /// Findings in rule-registration order
    pub findings: Vec<Finding>,
    /// True iff any finding carries ERROR severity
    pub has_blocking_error: bool,
}

impl Verdict {
    /// Creates a verdict, deriving the blocking flag from the findings
    pub fn new(claim_id: ClaimId, findings: Vec<Finding>) -> Self {
        let has_blocking_error = findings.iter().any(|f| f.severity.is_blocking());
        Self {
            claim_id,
            findings,
            has_blocking_error,
        }
    }

    /// Returns true if no rule raised anything
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the findings with the given severity
    pub fn findings_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Returns the number of ERROR findings
    pub fn error_count(&self) -> usize {
        self.findings_with_severity(Severity::Error).count()
    }

    /// Returns the number of WARNING findings
    pub fn warning_count(&self) -> usize {
        self.findings_with_severity(Severity::Warning).count()
    }
}
