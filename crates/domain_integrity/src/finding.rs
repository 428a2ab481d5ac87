//! Finding and severity model

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::ClaimId;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Logically impossible coding; blocks the claim from risk adjustment
    Error,
    /// High risk of miscoding or lost reimbursement; flagged for review
    Warning,
    /// Informational only
    Info,
}

impl Severity {
    /// Returns true if this severity blocks the claim
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        };
        f.write_str(label)
    }
}

/// Stable identifier of the rule that produced a finding
///
/// Rule ids are static strings so reports stay diffable across runs and
/// releases; renaming a rule id is a breaking change for downstream review
/// tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleId(&'static str);

impl RuleId {
    /// Creates a rule id from a static identifier
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One detected issue on one claim
///
/// Immutable once created; ownership transfers to the caller with the
/// enclosing verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Claim the finding was raised on
    pub claim_id: ClaimId,
    /// Rule that produced the finding
    pub rule_id: RuleId,
    /// Severity classification
    pub severity: Severity,
    /// Human-readable explanation for the reviewer
    pub message: String,
}

impl Finding {
    /// Creates an ERROR finding
    pub fn error(claim_id: ClaimId, rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            claim_id,
            rule_id,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Creates a WARNING finding
    pub fn warning(claim_id: ClaimId, rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            claim_id,
            rule_id,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Creates an INFO finding
    pub fn info(claim_id: ClaimId, rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            claim_id,
            rule_id,
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_error_blocks() {
        assert!(Severity::Error.is_blocking());
        assert!(!Severity::Warning.is_blocking());
        assert!(!Severity::Info.is_blocking());
    }

    #[test]
    fn test_severity_display_matches_report_labels() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Info.to_string(), "INFO");
    }

    #[test]
    fn test_finding_constructors_set_severity() {
        let claim_id = ClaimId::new("CLM-001").unwrap();
        let rule_id = RuleId::new("test-rule");

        let finding = Finding::warning(claim_id.clone(), rule_id, "check this");
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.rule_id.as_str(), "test-rule");
        assert_eq!(finding.message, "check this");

        let finding = Finding::error(claim_id, rule_id, "impossible");
        assert!(finding.severity.is_blocking());
    }
}
