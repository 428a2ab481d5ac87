//! Claim record

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{BeneficiaryId, ClaimId, DiagnosisCode, DrugCode};

use crate::error::ClaimError;

/// A claim record as supplied by the upstream ingestion collaborator
///
/// Code sets use `BTreeSet` so a claim carries each code at most once and
/// iterates its codes in a stable order, which keeps downstream verdicts
/// reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Upstream-assigned claim identifier
    pub claim_id: ClaimId,
    /// Beneficiary the claim was filed for, when the feed carries it
    pub beneficiary_id: Option<BeneficiaryId>,
    /// Date of service, when the feed carries it
    pub service_date: Option<NaiveDate>,
    /// ICD-10 diagnosis codes on the claim
    pub diagnosis_codes: BTreeSet<DiagnosisCode>,
    /// NDC / drug-class codes on the claim
    pub drug_codes: BTreeSet<DrugCode>,
}

impl Claim {
    /// Creates a claim from its identifier and code sets
    pub fn new(
        claim_id: ClaimId,
        diagnosis_codes: impl IntoIterator<Item = DiagnosisCode>,
        drug_codes: impl IntoIterator<Item = DrugCode>,
    ) -> Self {
        Self {
            claim_id,
            beneficiary_id: None,
            service_date: None,
            diagnosis_codes: diagnosis_codes.into_iter().collect(),
            drug_codes: drug_codes.into_iter().collect(),
        }
    }

    /// Attaches the beneficiary identifier carried by the source feed
    pub fn with_beneficiary(mut self, beneficiary_id: BeneficiaryId) -> Self {
        self.beneficiary_id = Some(beneficiary_id);
        self
    }

    /// Attaches the service date carried by the source feed
    pub fn with_service_date(mut self, service_date: NaiveDate) -> Self {
        self.service_date = Some(service_date);
        self
    }

    /// Returns true if the claim carries no diagnosis and no drug codes
    pub fn has_no_codes(&self) -> bool {
        self.diagnosis_codes.is_empty() && self.drug_codes.is_empty()
    }

    /// Returns true if any diagnosis code belongs to the given ICD-10 family
    pub fn has_diagnosis_in_family(&self, family: &str) -> bool {
        self.diagnosis_codes.iter().any(|c| c.in_family(family))
    }

    /// Validates the upstream invariant that a claim carries at least one code
    ///
    /// Ingestion rejects empty claims before they reach the engine; the
    /// engine itself tolerates them and reports an informational finding
    /// instead of failing.
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.has_no_codes() {
            return Err(ClaimError::EmptyClaim {
                claim_id: self.claim_id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim_id(value: &str) -> ClaimId {
        ClaimId::new(value).unwrap()
    }

    #[test]
    fn test_code_sets_deduplicate() {
        let claim = Claim::new(
            claim_id("CLM-001"),
            vec![
                DiagnosisCode::new("E11.9").unwrap(),
                DiagnosisCode::new("e11.9").unwrap(),
            ],
            vec![],
        );
        assert_eq!(claim.diagnosis_codes.len(), 1);
    }

    #[test]
    fn test_validate_rejects_empty_claim() {
        let claim = Claim::new(claim_id("CLM-EMPTY"), vec![], vec![]);
        let err = claim.validate().unwrap_err();
        assert!(matches!(err, ClaimError::EmptyClaim { .. }));
    }

    #[test]
    fn test_validate_accepts_drug_only_claim() {
        let claim = Claim::new(
            claim_id("CLM-RX"),
            vec![],
            vec![DrugCode::new("RX_METFORMIN").unwrap()],
        );
        assert!(claim.validate().is_ok());
    }

    #[test]
    fn test_has_diagnosis_in_family() {
        let claim = Claim::new(
            claim_id("CLM-001"),
            vec![DiagnosisCode::new("E11.42").unwrap()],
            vec![],
        );
        assert!(claim.has_diagnosis_in_family("E11"));
        assert!(!claim.has_diagnosis_in_family("E10"));
    }
}
