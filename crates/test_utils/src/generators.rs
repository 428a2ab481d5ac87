//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants. Strategies mix codes the 2026 crosswalk
//! knows with codes it does not, so properties exercise the unknown-code
//! paths as well.

use proptest::prelude::*;

use core_kernel::{ClaimId, DiagnosisCode, DrugCode};
use domain_claims::Claim;

/// Strategy for diagnosis codes the 2026 reference recognizes
pub fn known_diagnosis_code_strategy() -> impl Strategy<Value = DiagnosisCode> {
    prop_oneof![
        Just("E10.9"),
        Just("E11.9"),
        Just("E11.42"),
        Just("E11.69"),
        Just("E11.A"),
        Just("G62.9"),
    ]
    .prop_map(|code| DiagnosisCode::new(code).unwrap())
}

/// Strategy for arbitrary well-formed ICD-10-shaped codes
pub fn arbitrary_diagnosis_code_strategy() -> impl Strategy<Value = DiagnosisCode> {
    "[A-Z][0-9]{2}(\\.[0-9A-Z]{1,2})?".prop_map(|code| DiagnosisCode::new(code).unwrap())
}

/// Strategy for diagnosis codes, weighted toward recognized ones
pub fn diagnosis_code_strategy() -> impl Strategy<Value = DiagnosisCode> {
    prop_oneof![
        3 => known_diagnosis_code_strategy(),
        1 => arbitrary_diagnosis_code_strategy(),
    ]
}

/// Strategy for drug codes the 2026 reference recognizes
pub fn known_drug_code_strategy() -> impl Strategy<Value = DrugCode> {
    prop_oneof![
        Just("RX_INSULIN"),
        Just("RX_INSULIN_LANTUS"),
        Just("RX_GLP1_OZEMPIC"),
        Just("RX_METFORMIN"),
    ]
    .prop_map(|code| DrugCode::new(code).unwrap())
}

/// Strategy for drug codes, weighted toward recognized ones
pub fn drug_code_strategy() -> impl Strategy<Value = DrugCode> {
    prop_oneof![
        3 => known_drug_code_strategy(),
        1 => "RX_[A-Z]{4,10}".prop_map(|code| DrugCode::new(code).unwrap()),
    ]
}

/// Strategy for claims with random (possibly empty) code sets
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        "CLM-[0-9]{6}",
        prop::collection::btree_set(diagnosis_code_strategy(), 0..5),
        prop::collection::btree_set(drug_code_strategy(), 0..3),
    )
        .prop_map(|(id, diagnosis_codes, drug_codes)| {
            Claim::new(ClaimId::new(id).unwrap(), diagnosis_codes, drug_codes)
        })
}

/// Strategy for claim batches with unique claim identifiers
///
/// Identifiers are reassigned positionally so batch-level properties can
/// match verdicts back to claims without collisions.
pub fn claim_batch_strategy(max_len: usize) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(claim_strategy(), 0..max_len).prop_map(|claims| {
        claims
            .into_iter()
            .enumerate()
            .map(|(index, mut claim)| {
                claim.claim_id = ClaimId::new(format!("CLM-{index:06}")).unwrap();
                claim
            })
            .collect()
    })
}
