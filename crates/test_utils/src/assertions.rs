//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use domain_claims::Claim;
use domain_integrity::{RuleId, Severity, Verdict};

/// Asserts that a verdict contains a finding from the given rule with the
/// given severity
///
/// # Panics
///
/// Panics if no such finding exists, listing the findings that were present
pub fn assert_finding(verdict: &Verdict, rule_id: RuleId, severity: Severity) {
    let found = verdict
        .findings
        .iter()
        .any(|f| f.rule_id == rule_id && f.severity == severity);

    assert!(
        found,
        "Expected a {} finding from rule '{}' on claim {}, found: {:?}",
        severity,
        rule_id,
        verdict.claim_id,
        verdict
            .findings
            .iter()
            .map(|f| format!("{}:{}", f.rule_id, f.severity))
            .collect::<Vec<_>>()
    );
}

/// Asserts that no finding from the given rule is present
pub fn assert_no_finding(verdict: &Verdict, rule_id: RuleId) {
    let offending: Vec<_> = verdict
        .findings
        .iter()
        .filter(|f| f.rule_id == rule_id)
        .collect();

    assert!(
        offending.is_empty(),
        "Expected no finding from rule '{}' on claim {}, found: {:?}",
        rule_id,
        verdict.claim_id,
        offending
    );
}

/// Asserts that a verdict is clean: no findings, nothing blocking
pub fn assert_clean(verdict: &Verdict) {
    assert!(
        verdict.is_clean() && !verdict.has_blocking_error,
        "Expected a clean verdict for claim {}, found: {:?}",
        verdict.claim_id,
        verdict.findings
    );
}

/// Asserts that a verdict blocks the claim
pub fn assert_blocking(verdict: &Verdict) {
    assert!(
        verdict.has_blocking_error,
        "Expected a blocking verdict for claim {}, found severities: {:?}",
        verdict.claim_id,
        verdict
            .findings
            .iter()
            .map(|f| f.severity)
            .collect::<Vec<_>>()
    );
}

/// Asserts that a batch produced exactly one verdict per claim, in input
/// order
pub fn assert_verdicts_match_input(claims: &[Claim], verdicts: &[Verdict]) {
    assert_eq!(
        claims.len(),
        verdicts.len(),
        "Expected {} verdicts, got {}",
        claims.len(),
        verdicts.len()
    );

    for (claim, verdict) in claims.iter().zip(verdicts) {
        assert_eq!(
            claim.claim_id, verdict.claim_id,
            "Verdict order does not match input order"
        );
    }
}
