//! Comprehensive tests for clinical code value objects

use proptest::prelude::*;

use core_kernel::{DiagnosisCode, DrugCode};

// ============================================================================
// DiagnosisCode Tests
// ============================================================================

mod diagnosis_code_tests {
    use super::*;

    #[test]
    fn test_family_with_subcategory() {
        let code = DiagnosisCode::new("E11.42").unwrap();
        assert_eq!(code.family(), "E11");
    }

    #[test]
    fn test_family_without_subcategory() {
        let code = DiagnosisCode::new("I10").unwrap();
        assert_eq!(code.family(), "I10");
    }

    #[test]
    fn test_alphanumeric_subcategory() {
        // E11.A is the type 2 diabetes remission code
        let code = DiagnosisCode::new("e11.a").unwrap();
        assert_eq!(code.as_str(), "E11.A");
        assert_eq!(code.family(), "E11");
    }

    #[test]
    fn test_serde_is_transparent() {
        let code = DiagnosisCode::new("E10.9").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"E10.9\"");

        let back: DiagnosisCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn test_case_insensitive_equality_after_normalization() {
        let upper = DiagnosisCode::new("E11.9").unwrap();
        let lower = DiagnosisCode::new("e11.9").unwrap();
        assert_eq!(upper, lower);
    }
}

// ============================================================================
// DrugCode Tests
// ============================================================================

mod drug_code_tests {
    use super::*;

    #[test]
    fn test_class_identifier_round_trip() {
        let code = DrugCode::new("RX_INSULIN_LANTUS").unwrap();
        assert_eq!(code.as_str(), "RX_INSULIN_LANTUS");
        assert_eq!(code.to_string(), "RX_INSULIN_LANTUS");
    }

    #[test]
    fn test_ndc_style_code_accepted() {
        // True 11-digit NDCs pass through untouched
        let code = DrugCode::new("00002-1433-80").unwrap();
        assert_eq!(code.as_str(), "00002-1433-80");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_normalization_is_idempotent(raw in "[A-Za-z][0-9]{2}(\\.[0-9A-Za-z]{1,2})?") {
        let once = DiagnosisCode::new(&raw).unwrap();
        let twice = DiagnosisCode::new(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_family_is_prefix_of_code(raw in "[A-Z][0-9]{2}\\.[0-9A-Z]{1,2}") {
        let code = DiagnosisCode::new(&raw).unwrap();
        prop_assert!(code.as_str().starts_with(code.family()));
        prop_assert!(!code.family().contains('.'));
    }

    #[test]
    fn prop_blank_input_always_rejected(raw in "[ \\t]*") {
        prop_assert!(DiagnosisCode::new(&raw).is_err());
        prop_assert!(DrugCode::new(&raw).is_err());
    }
}
