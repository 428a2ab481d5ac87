//! Per-claim code classification
//!
//! Classification happens exactly once per claim. Every rule reads the same
//! [`ClassifiedClaim`], so rules stay consistent with each other and the cost
//! of a claim is O(codes) regardless of how many rules are registered.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{ClaimId, DiagnosisCode, DrugCode};
use domain_claims::Claim;

use crate::error::CrosswalkError;
use crate::reference::{CrosswalkReference, DiagnosisFamily, TherapeuticClass};

/// Category of a single diagnosis code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisCategory {
    /// Type 1 diabetes
    Type1,
    /// Type 2 diabetes, active
    Type2Active,
    /// Type 2 diabetes in remission
    Type2Remission,
    /// Not a diabetes code
    Other,
}

/// Boolean facts about one claim, computed once and shared by all rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedClaim {
    /// Identifier of the classified claim
    pub claim_id: ClaimId,
    /// A Type 1 diabetes code is present
    pub has_type1: bool,
    /// An active (non-remission) Type 2 diabetes code is present
    pub has_type2_active: bool,
    /// The Type 2 remission code is present
    pub has_type2_remission: bool,
    /// A combination code directly encoding a complication is present
    pub has_complication_link: bool,
    /// A generic complication code (e.g. unspecified neuropathy) is present
    pub has_unspecified_complication: bool,
    /// A GLP-1 or insulin drug code is present
    pub has_glp1_or_insulin: bool,
    /// Any diabetes diagnosis at all, active or not
    pub has_any_diabetes_support: bool,
    /// The claim carries no codes of either kind
    pub is_empty: bool,
}

/// Classifies claims against a crosswalk reference
///
/// The classifier is pure: same claim and reference, same facts. It holds
/// the only shared state in the system - the immutable reference table - so
/// one classifier may serve any number of threads.
#[derive(Debug, Clone)]
pub struct CodeClassifier {
    reference: CrosswalkReference,
}

impl CodeClassifier {
    /// Creates a classifier over a validated reference
    ///
    /// Fails with the reference's configuration error if a required
    /// category is missing; this is the only fatal path in the system.
    pub fn new(reference: CrosswalkReference) -> Result<Self, CrosswalkError> {
        reference.validate()?;
        Ok(Self { reference })
    }

    /// Returns the reference this classifier consults
    pub fn reference(&self) -> &CrosswalkReference {
        &self.reference
    }

    /// Categorizes a single diagnosis code
    ///
    /// Remission takes precedence over the family prefix: the remission code
    /// shares the Type 2 family but is not an active diagnosis.
    pub fn diagnosis_category(&self, code: &DiagnosisCode) -> DiagnosisCategory {
        if self.reference.is_remission(code) {
            return DiagnosisCategory::Type2Remission;
        }
        match self.reference.diagnosis_family(code) {
            DiagnosisFamily::Type1 => DiagnosisCategory::Type1,
            DiagnosisFamily::Type2 => DiagnosisCategory::Type2Active,
            DiagnosisFamily::Other => DiagnosisCategory::Other,
        }
    }

    /// Returns the therapeutic class of a single drug code
    pub fn therapeutic_class(&self, code: &DrugCode) -> TherapeuticClass {
        self.reference.therapeutic_class(code)
    }

    /// Computes the per-claim facts consumed by every rule
    ///
    /// Total: unknown codes land in the `Other` buckets and set no facts.
    pub fn classify(&self, claim: &Claim) -> ClassifiedClaim {
        let mut classified = ClassifiedClaim {
            claim_id: claim.claim_id.clone(),
            has_type1: false,
            has_type2_active: false,
            has_type2_remission: false,
            has_complication_link: false,
            has_unspecified_complication: false,
            has_glp1_or_insulin: false,
            has_any_diabetes_support: false,
            is_empty: claim.has_no_codes(),
        };

        for code in &claim.diagnosis_codes {
            match self.diagnosis_category(code) {
                DiagnosisCategory::Type1 => classified.has_type1 = true,
                DiagnosisCategory::Type2Active => classified.has_type2_active = true,
                DiagnosisCategory::Type2Remission => classified.has_type2_remission = true,
                DiagnosisCategory::Other => {}
            }
            if self.reference.is_complication_linked(code) {
                classified.has_complication_link = true;
            }
            if self.reference.is_unspecified_complication(code) {
                classified.has_unspecified_complication = true;
            }
        }

        classified.has_any_diabetes_support =
            classified.has_type1 || classified.has_type2_active || classified.has_type2_remission;

        classified.has_glp1_or_insulin = claim.drug_codes.iter().any(|code| {
            matches!(
                self.reference.therapeutic_class(code),
                TherapeuticClass::Glp1 | TherapeuticClass::Insulin
            )
        });

        debug!(
            claim_id = %classified.claim_id,
            has_type1 = classified.has_type1,
            has_type2_active = classified.has_type2_active,
            has_type2_remission = classified.has_type2_remission,
            "Classified claim"
        );

        classified
    }
}
