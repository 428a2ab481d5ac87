//! Concrete integrity rules for the 2026 RxHCC model
//!
//! Each rule fires independently; no rule suppresses another. Messages keep
//! the clinical phrasing reviewers already know from the legacy checker.

use domain_crosswalk::ClassifiedClaim;

use crate::finding::{Finding, RuleId};
use crate::rule::IntegrityRule;

/// Rule id for [`DiagnosisTypeConflictRule`]
pub const DIAGNOSIS_TYPE_CONFLICT: RuleId = RuleId::new("diagnosis-type-conflict");
/// Rule id for [`RemissionConflictRule`]
pub const REMISSION_CONFLICT: RuleId = RuleId::new("remission-conflict");
/// Rule id for [`DrugSupportRule`]
pub const DRUG_SUPPORT: RuleId = RuleId::new("drug-support");
/// Rule id for [`SpecificityGapRule`]
pub const SPECIFICITY_GAP: RuleId = RuleId::new("specificity-gap");

/// Flags claims carrying both Type 1 and Type 2 diabetes diagnoses
///
/// A patient cannot carry a principal Type 1 and Type 2 diagnosis on the
/// same claim; the combination is a data-entry contradiction rather than a
/// coding nuance, so it blocks the claim.
#[derive(Debug, Default)]
pub struct DiagnosisTypeConflictRule;

impl IntegrityRule for DiagnosisTypeConflictRule {
    fn id(&self) -> RuleId {
        DIAGNOSIS_TYPE_CONFLICT
    }

    fn evaluate(&self, claim: &ClassifiedClaim) -> Vec<Finding> {
        if claim.has_type1 && (claim.has_type2_active || claim.has_type2_remission) {
            vec![Finding::error(
                claim.claim_id.clone(),
                self.id(),
                "Type 1 (E10.x) and Type 2 (E11.x) diabetes codes cannot coexist on the same claim",
            )]
        } else {
            Vec::new()
        }
    }
}

/// Flags claims carrying both remission and active Type 2 codes
///
/// An active complication code and the remission code are mutually
/// exclusive for a single visit.
#[derive(Debug, Default)]
pub struct RemissionConflictRule;

impl IntegrityRule for RemissionConflictRule {
    fn id(&self) -> RuleId {
        REMISSION_CONFLICT
    }

    fn evaluate(&self, claim: &ClassifiedClaim) -> Vec<Finding> {
        if claim.has_type2_remission && claim.has_type2_active {
            vec![Finding::error(
                claim.claim_id.clone(),
                self.id(),
                "Remission (E11.A) and active Type 2 diabetes codes cannot coexist",
            )]
        } else {
            Vec::new()
        }
    }
}

/// Flags GLP-1/insulin therapy with no diabetes diagnosis anywhere on the claim
///
/// High-cost diabetes drugs without any E10.x/E11.x diagnosis point at a
/// missing or miscoded claim and risk denied reimbursement or an audit flag.
#[derive(Debug, Default)]
pub struct DrugSupportRule;

impl IntegrityRule for DrugSupportRule {
    fn id(&self) -> RuleId {
        DRUG_SUPPORT
    }

    fn evaluate(&self, claim: &ClassifiedClaim) -> Vec<Finding> {
        if claim.has_glp1_or_insulin && !claim.has_any_diabetes_support {
            vec![Finding::warning(
                claim.claim_id.clone(),
                self.id(),
                "Anti-diabetic drug (Insulin/GLP-1) dispensed without a supporting E10.x/E11.x diagnosis",
            )]
        } else {
            Vec::new()
        }
    }
}

/// Flags generic complication codes that should be a combination code
///
/// The risk model captures the higher-weighted category only through the
/// combination code (e.g. E11.42); a generic complication code next to an
/// active Type 2 diagnosis silently loses that reimbursement.
#[derive(Debug, Default)]
pub struct SpecificityGapRule;

impl IntegrityRule for SpecificityGapRule {
    fn id(&self) -> RuleId {
        SPECIFICITY_GAP
    }

    fn evaluate(&self, claim: &ClassifiedClaim) -> Vec<Finding> {
        if claim.has_unspecified_complication
            && claim.has_type2_active
            && !claim.has_complication_link
        {
            vec![Finding::warning(
                claim.claim_id.clone(),
                self.id(),
                "Specificity gap: generic complication code found alongside active Type 2 diabetes; \
                 recommend the combination code (e.g. E11.42) to capture the linked RxHCC category",
            )]
        } else {
            Vec::new()
        }
    }
}
