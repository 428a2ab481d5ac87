//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the claims
//! integrity system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;

use core_kernel::{BeneficiaryId, ClaimId, DiagnosisCode, DrugCode};
use domain_claims::Claim;
use domain_crosswalk::{CrosswalkReference, DiagnosisFamily, TherapeuticClass};

/// Fixture for diagnosis and drug code test data
pub struct CodeFixtures;

impl CodeFixtures {
    /// Type 1 diabetes, unspecified
    pub fn e10_9() -> DiagnosisCode {
        DiagnosisCode::new("E10.9").unwrap()
    }

    /// Type 2 diabetes, unspecified (active)
    pub fn e11_9() -> DiagnosisCode {
        DiagnosisCode::new("E11.9").unwrap()
    }

    /// Type 2 diabetes with diabetic polyneuropathy (combination code)
    pub fn e11_42() -> DiagnosisCode {
        DiagnosisCode::new("E11.42").unwrap()
    }

    /// Type 2 diabetes with other specified complication
    pub fn e11_69() -> DiagnosisCode {
        DiagnosisCode::new("E11.69").unwrap()
    }

    /// Type 2 diabetes in remission
    pub fn e11_a() -> DiagnosisCode {
        DiagnosisCode::new("E11.A").unwrap()
    }

    /// Polyneuropathy, unspecified (generic complication code)
    pub fn g62_9() -> DiagnosisCode {
        DiagnosisCode::new("G62.9").unwrap()
    }

    /// Essential hypertension - a non-diabetes diagnosis
    pub fn i10() -> DiagnosisCode {
        DiagnosisCode::new("I10").unwrap()
    }

    /// A GLP-1 agent
    pub fn glp1_ozempic() -> DrugCode {
        DrugCode::new("RX_GLP1_OZEMPIC").unwrap()
    }

    /// An insulin agent
    pub fn insulin() -> DrugCode {
        DrugCode::new("RX_INSULIN").unwrap()
    }

    /// Metformin - a diabetes drug outside the GLP-1/insulin classes
    pub fn metformin() -> DrugCode {
        DrugCode::new("RX_METFORMIN").unwrap()
    }
}

/// Fixture for claim test data
///
/// The five scenario claims mirror the legacy checker's batch demo cases.
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Standard service date used across claim fixtures
    pub fn service_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    /// Scenario 1: specificity gap - generic neuropathy next to unlinked
    /// Type 2 diabetes
    pub fn specificity_gap_claim() -> Claim {
        Claim::new(
            ClaimId::new("CLM-001").unwrap(),
            vec![CodeFixtures::e11_9(), CodeFixtures::g62_9()],
            vec![CodeFixtures::metformin()],
        )
    }

    /// Scenario 2: remission and active Type 2 codes on one claim
    pub fn remission_conflict_claim() -> Claim {
        Claim::new(
            ClaimId::new("CLM-002").unwrap(),
            vec![CodeFixtures::e11_a(), CodeFixtures::e11_9()],
            vec![],
        )
    }

    /// Scenario 3: Type 1 and Type 2 codes on one claim
    pub fn type_conflict_claim() -> Claim {
        Claim::new(
            ClaimId::new("CLM-003").unwrap(),
            vec![CodeFixtures::e10_9(), CodeFixtures::e11_9()],
            vec![],
        )
    }

    /// Scenario 4: GLP-1 therapy with no diabetes diagnosis
    pub fn glp1_without_diagnosis_claim() -> Claim {
        Claim::new(
            ClaimId::new("CLM-004").unwrap(),
            vec![CodeFixtures::i10()],
            vec![CodeFixtures::glp1_ozempic()],
        )
    }

    /// Scenario 5: clean claim - linked complication code plus insulin
    pub fn clean_claim() -> Claim {
        Claim::new(
            ClaimId::new("CLM-005").unwrap(),
            vec![CodeFixtures::e11_42()],
            vec![CodeFixtures::insulin()],
        )
    }

    /// A claim that slipped past upstream validation with no codes at all
    pub fn empty_claim() -> Claim {
        Claim::new(ClaimId::new("CLM-EMPTY").unwrap(), vec![], vec![])
    }

    /// A fully annotated claim for serde and feed-shape tests
    pub fn annotated_claim() -> Claim {
        Self::specificity_gap_claim()
            .with_beneficiary(BeneficiaryId::new("BENE-10001").unwrap())
            .with_service_date(Self::service_date())
    }

    /// The five scenario claims in their demo order
    pub fn scenario_batch() -> Vec<Claim> {
        vec![
            Self::specificity_gap_claim(),
            Self::remission_conflict_claim(),
            Self::type_conflict_claim(),
            Self::glp1_without_diagnosis_claim(),
            Self::clean_claim(),
        ]
    }
}

/// Fixture for crosswalk reference test data
pub struct CrosswalkFixtures;

impl CrosswalkFixtures {
    /// The built-in 2026 RxHCC model reference
    pub fn model_2026() -> CrosswalkReference {
        CrosswalkReference::model_2026().clone()
    }

    /// The smallest reference that still passes validation
    pub fn minimal() -> CrosswalkReference {
        CrosswalkReference::builder()
            .diagnosis_family("E11", DiagnosisFamily::Type2)
            .complication_code("E11.42")
            .remission_code("E11.A")
            .drug_class("RX_INSULIN", TherapeuticClass::Insulin)
            .build()
    }

    /// A reference missing its remission-code category, for
    /// configuration-error tests
    pub fn missing_remission_codes() -> CrosswalkReference {
        CrosswalkReference::builder()
            .diagnosis_family("E10", DiagnosisFamily::Type1)
            .diagnosis_family("E11", DiagnosisFamily::Type2)
            .complication_code("E11.42")
            .drug_class("RX_INSULIN", TherapeuticClass::Insulin)
            .build()
    }
}
