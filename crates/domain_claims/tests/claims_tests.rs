//! Comprehensive tests for domain_claims

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::{BeneficiaryId, ClaimId, DiagnosisCode, DrugCode};
use domain_claims::{Claim, ClaimError};

fn dx(code: &str) -> DiagnosisCode {
    DiagnosisCode::new(code).unwrap()
}

fn rx(code: &str) -> DrugCode {
    DrugCode::new(code).unwrap()
}

fn create_test_claim() -> Claim {
    Claim::new(
        ClaimId::new("CLM-001").unwrap(),
        vec![dx("E11.9"), dx("G62.9")],
        vec![rx("RX_METFORMIN")],
    )
}

// ============================================================================
// Construction Tests
// ============================================================================

mod construction_tests {
    use super::*;

    #[test]
    fn test_claim_new() {
        let claim = create_test_claim();

        assert_eq!(claim.claim_id.as_str(), "CLM-001");
        assert_eq!(claim.diagnosis_codes.len(), 2);
        assert_eq!(claim.drug_codes.len(), 1);
        assert!(claim.beneficiary_id.is_none());
        assert!(claim.service_date.is_none());
    }

    #[test]
    fn test_claim_with_feed_annotations() {
        let claim = create_test_claim()
            .with_beneficiary(BeneficiaryId::new("BENE-10001").unwrap())
            .with_service_date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());

        assert_eq!(
            claim.beneficiary_id.as_ref().map(|b| b.as_str()),
            Some("BENE-10001")
        );
        assert_eq!(
            claim.service_date,
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );
    }

    #[test]
    fn test_diagnosis_codes_iterate_in_stable_order() {
        let claim = Claim::new(
            ClaimId::new("CLM-ORDER").unwrap(),
            vec![dx("G62.9"), dx("E10.9"), dx("E11.42")],
            vec![],
        );
        let order: Vec<&str> = claim.diagnosis_codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(order, vec!["E10.9", "E11.42", "G62.9"]);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_claim_with_codes_is_valid() {
        assert!(create_test_claim().validate().is_ok());
    }

    #[test]
    fn test_diagnosis_only_claim_is_valid() {
        let claim = Claim::new(ClaimId::new("CLM-DX").unwrap(), vec![dx("I10")], vec![]);
        assert!(claim.validate().is_ok());
    }

    #[test]
    fn test_empty_claim_reports_its_id() {
        let claim = Claim::new(ClaimId::new("CLM-EMPTY").unwrap(), vec![], vec![]);
        let err = claim.validate().unwrap_err();
        let ClaimError::EmptyClaim { claim_id } = err;
        assert_eq!(claim_id, "CLM-EMPTY");
    }
}

// ============================================================================
// Serde Tests
// ============================================================================

mod serde_tests {
    use super::*;

    #[test]
    fn test_claim_round_trips_through_json() {
        let claim = create_test_claim()
            .with_service_date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());

        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claim);
    }

    #[test]
    fn test_claim_deserializes_from_feed_shape() {
        // Shape matches the ingestion feed: id plus two arrays of strings
        let json = r#"{
            "claim_id": "CLM-004",
            "beneficiary_id": null,
            "service_date": null,
            "diagnosis_codes": ["I10"],
            "drug_codes": ["RX_GLP1_OZEMPIC"]
        }"#;

        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.claim_id.as_str(), "CLM-004");
        assert!(claim.has_diagnosis_in_family("I10"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_code_sets_never_hold_duplicates(
        codes in prop::collection::vec("[A-Z][0-9]{2}(\\.[0-9A-Z]{1,2})?", 0..10)
    ) {
        let parsed: Vec<DiagnosisCode> =
            codes.iter().map(|c| DiagnosisCode::new(c).unwrap()).collect();
        let distinct = parsed.iter().collect::<std::collections::BTreeSet<_>>().len();

        let claim = Claim::new(ClaimId::new("CLM-PROP").unwrap(), parsed.clone(), vec![]);
        prop_assert_eq!(claim.diagnosis_codes.len(), distinct);
    }

    #[test]
    fn prop_validate_agrees_with_has_no_codes(
        dx in prop::collection::vec("[A-Z][0-9]{2}", 0..3),
        rx in prop::collection::vec("RX_[A-Z]{3,8}", 0..3),
    ) {
        let claim = Claim::new(
            ClaimId::new("CLM-PROP").unwrap(),
            dx.iter().map(|c| DiagnosisCode::new(c).unwrap()),
            rx.iter().map(|c| DrugCode::new(c).unwrap()),
        );
        prop_assert_eq!(claim.validate().is_err(), claim.has_no_codes());
    }
}
