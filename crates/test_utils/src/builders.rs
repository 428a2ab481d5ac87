//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::NaiveDate;

use core_kernel::{BeneficiaryId, ClaimId, DiagnosisCode, DrugCode};
use domain_claims::Claim;

/// Builder for constructing test claims
///
/// Code arguments are raw strings; the builder panics on malformed input so
/// a typo in a test fails loudly at the call site.
pub struct TestClaimBuilder {
    claim_id: ClaimId,
    beneficiary_id: Option<BeneficiaryId>,
    service_date: Option<NaiveDate>,
    diagnosis_codes: Vec<DiagnosisCode>,
    drug_codes: Vec<DrugCode>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim_id: ClaimId::new("CLM-TEST-001").unwrap(),
            beneficiary_id: None,
            service_date: None,
            diagnosis_codes: Vec::new(),
            drug_codes: Vec::new(),
        }
    }

    /// Sets the claim identifier
    pub fn with_claim_id(mut self, id: &str) -> Self {
        self.claim_id = ClaimId::new(id).expect("valid claim id");
        self
    }

    /// Sets the beneficiary identifier
    pub fn with_beneficiary(mut self, id: &str) -> Self {
        self.beneficiary_id = Some(BeneficiaryId::new(id).expect("valid beneficiary id"));
        self
    }

    /// Sets the service date
    pub fn with_service_date(mut self, date: NaiveDate) -> Self {
        self.service_date = Some(date);
        self
    }

    /// Adds a diagnosis code
    pub fn with_diagnosis(mut self, code: &str) -> Self {
        self.diagnosis_codes
            .push(DiagnosisCode::new(code).expect("valid diagnosis code"));
        self
    }

    /// Adds several diagnosis codes
    pub fn with_diagnoses(mut self, codes: &[&str]) -> Self {
        for code in codes {
            self = self.with_diagnosis(code);
        }
        self
    }

    /// Adds a drug code
    pub fn with_drug(mut self, code: &str) -> Self {
        self.drug_codes
            .push(DrugCode::new(code).expect("valid drug code"));
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        let mut claim = Claim::new(self.claim_id, self.diagnosis_codes, self.drug_codes);
        if let Some(beneficiary_id) = self.beneficiary_id {
            claim = claim.with_beneficiary(beneficiary_id);
        }
        if let Some(service_date) = self.service_date {
            claim = claim.with_service_date(service_date);
        }
        claim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let claim = TestClaimBuilder::new().build();
        assert_eq!(claim.claim_id.as_str(), "CLM-TEST-001");
        assert!(claim.has_no_codes());
    }

    #[test]
    fn test_builder_accumulates_codes() {
        let claim = TestClaimBuilder::new()
            .with_claim_id("CLM-042")
            .with_diagnoses(&["E11.9", "G62.9"])
            .with_drug("RX_METFORMIN")
            .build();

        assert_eq!(claim.claim_id.as_str(), "CLM-042");
        assert_eq!(claim.diagnosis_codes.len(), 2);
        assert_eq!(claim.drug_codes.len(), 1);
    }
}
