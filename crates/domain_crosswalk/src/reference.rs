//! Crosswalk reference tables
//!
//! The reference maps raw code strings to classification metadata. It is
//! configuration, not computation: the tables are produced and maintained by
//! an external crosswalk pipeline and injected here at engine construction.
//! Once loaded the reference is immutable; a process loads it exactly once
//! and shares it read-only across workers.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use core_kernel::{DiagnosisCode, DrugCode};

use crate::error::CrosswalkError;

/// ICD-10 diagnosis family category
///
/// Deserialization is total, like every other lookup here: a category label
/// this engine does not reason about becomes `Other` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DiagnosisFamily {
    /// Type 1 diabetes (E10.x)
    Type1,
    /// Type 2 diabetes (E11.x)
    Type2,
    /// Any family the rules do not reason about
    Other,
}

impl From<String> for DiagnosisFamily {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "type1" => DiagnosisFamily::Type1,
            "type2" => DiagnosisFamily::Type2,
            _ => DiagnosisFamily::Other,
        }
    }
}

/// Therapeutic class of a drug code
///
/// Deserialization is total; unrecognized class labels become `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TherapeuticClass {
    /// GLP-1 receptor agonists
    Glp1,
    /// Insulins
    Insulin,
    /// Any class the rules do not reason about
    Other,
}

impl From<String> for TherapeuticClass {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "glp1" => TherapeuticClass::Glp1,
            "insulin" => TherapeuticClass::Insulin,
            _ => TherapeuticClass::Other,
        }
    }
}

/// Crosswalk lookup reference
///
/// Recognized categories:
/// - `diagnosis_families`: ICD-10 family prefix -> family category
/// - `complication_codes`: exact codes that directly encode a linked
///   complication (e.g. `E11.42`)
/// - `remission_codes`: exact codes marking a condition in remission
///   (e.g. `E11.A`)
/// - `unspecified_complication_codes`: generic complication codes that
///   should have been captured through a combination code (e.g. `G62.9`)
/// - `drug_classes`: NDC/class-identifier prefix -> therapeutic class
///
/// Lookups are total: anything absent from the tables classifies as
/// `Other`/unlinked, never as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswalkReference {
    diagnosis_families: BTreeMap<String, DiagnosisFamily>,
    complication_codes: BTreeSet<String>,
    remission_codes: BTreeSet<String>,
    #[serde(default)]
    unspecified_complication_codes: BTreeSet<String>,
    drug_classes: BTreeMap<String, TherapeuticClass>,
}

/// Built-in reference for the 2026 RxHCC model
static MODEL_2026: Lazy<CrosswalkReference> = Lazy::new(|| {
    CrosswalkReference::builder()
        .diagnosis_family("E10", DiagnosisFamily::Type1)
        .diagnosis_family("E11", DiagnosisFamily::Type2)
        .complication_code("E11.42")
        .complication_code("E11.69")
        .remission_code("E11.A")
        .unspecified_complication_code("G62.9")
        .drug_class("RX_INSULIN", TherapeuticClass::Insulin)
        .drug_class("RX_GLP1", TherapeuticClass::Glp1)
        .drug_class("RX_METFORMIN", TherapeuticClass::Other)
        .build()
});

impl CrosswalkReference {
    /// Returns the process-wide reference for the 2026 RxHCC model
    ///
    /// Initialized on first use and immutable thereafter.
    pub fn model_2026() -> &'static CrosswalkReference {
        &MODEL_2026
    }

    /// Starts building a reference from explicit entries
    pub fn builder() -> CrosswalkReferenceBuilder {
        CrosswalkReferenceBuilder::default()
    }

    /// Loads a reference from its JSON representation
    ///
    /// Table keys are normalized to uppercase so the tables match codes the
    /// way [`DiagnosisCode`]/[`DrugCode`] normalize them. The loaded
    /// reference is validated before it is returned.
    pub fn from_json_str(json: &str) -> Result<Self, CrosswalkError> {
        let reference: Self = serde_json::from_str(json)?;
        let reference = reference.normalized();
        reference.validate()?;
        Ok(reference)
    }

    /// Checks that every required category is present and non-empty
    pub fn validate(&self) -> Result<(), CrosswalkError> {
        if self.diagnosis_families.is_empty() {
            return Err(CrosswalkError::MissingCategory("diagnosis_families"));
        }
        if self.complication_codes.is_empty() {
            return Err(CrosswalkError::MissingCategory("complication_codes"));
        }
        if self.remission_codes.is_empty() {
            return Err(CrosswalkError::MissingCategory("remission_codes"));
        }
        if self.drug_classes.is_empty() {
            return Err(CrosswalkError::MissingCategory("drug_classes"));
        }
        Ok(())
    }

    /// Returns the family category for a diagnosis code
    pub fn diagnosis_family(&self, code: &DiagnosisCode) -> DiagnosisFamily {
        self.diagnosis_families
            .get(code.family())
            .copied()
            .unwrap_or(DiagnosisFamily::Other)
    }

    /// Returns true if the code directly encodes a linked complication
    pub fn is_complication_linked(&self, code: &DiagnosisCode) -> bool {
        self.complication_codes.contains(code.as_str())
    }

    /// Returns true if the code marks a condition in remission
    pub fn is_remission(&self, code: &DiagnosisCode) -> bool {
        self.remission_codes.contains(code.as_str())
    }

    /// Returns true if the code is a generic complication code that the
    /// risk model expects to see captured through a combination code instead
    pub fn is_unspecified_complication(&self, code: &DiagnosisCode) -> bool {
        self.unspecified_complication_codes.contains(code.as_str())
    }

    /// Returns the therapeutic class for a drug code
    ///
    /// Class identifiers are prefix-matched (`RX_GLP1_OZEMPIC` resolves via
    /// the `RX_GLP1` entry); when several entries match, the longest prefix
    /// wins. Unknown codes are `Other`.
    pub fn therapeutic_class(&self, code: &DrugCode) -> TherapeuticClass {
        self.drug_classes
            .iter()
            .filter(|(prefix, _)| code.as_str().starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, class)| *class)
            .unwrap_or(TherapeuticClass::Other)
    }

    fn normalized(self) -> Self {
        Self {
            diagnosis_families: self
                .diagnosis_families
                .into_iter()
                .map(|(k, v)| (k.trim().to_ascii_uppercase(), v))
                .collect(),
            complication_codes: normalize_set(self.complication_codes),
            remission_codes: normalize_set(self.remission_codes),
            unspecified_complication_codes: normalize_set(self.unspecified_complication_codes),
            drug_classes: self
                .drug_classes
                .into_iter()
                .map(|(k, v)| (k.trim().to_ascii_uppercase(), v))
                .collect(),
        }
    }
}

fn normalize_set(codes: BTreeSet<String>) -> BTreeSet<String> {
    codes
        .into_iter()
        .map(|c| c.trim().to_ascii_uppercase())
        .collect()
}

/// Fluent builder for crosswalk references
///
/// Building does not validate; validation happens when the reference is
/// handed to the engine, so tests can construct deliberately incomplete
/// tables to exercise the configuration-error path.
#[derive(Debug, Default)]
pub struct CrosswalkReferenceBuilder {
    diagnosis_families: BTreeMap<String, DiagnosisFamily>,
    complication_codes: BTreeSet<String>,
    remission_codes: BTreeSet<String>,
    unspecified_complication_codes: BTreeSet<String>,
    drug_classes: BTreeMap<String, TherapeuticClass>,
}

impl CrosswalkReferenceBuilder {
    /// Maps an ICD-10 family prefix to a family category
    pub fn diagnosis_family(mut self, prefix: &str, family: DiagnosisFamily) -> Self {
        self.diagnosis_families
            .insert(prefix.trim().to_ascii_uppercase(), family);
        self
    }

    /// Registers an exact complication-carrying code
    pub fn complication_code(mut self, code: &str) -> Self {
        self.complication_codes
            .insert(code.trim().to_ascii_uppercase());
        self
    }

    /// Registers an exact remission code
    pub fn remission_code(mut self, code: &str) -> Self {
        self.remission_codes.insert(code.trim().to_ascii_uppercase());
        self
    }

    /// Registers a generic complication code
    pub fn unspecified_complication_code(mut self, code: &str) -> Self {
        self.unspecified_complication_codes
            .insert(code.trim().to_ascii_uppercase());
        self
    }

    /// Maps a drug-code prefix to a therapeutic class
    pub fn drug_class(mut self, prefix: &str, class: TherapeuticClass) -> Self {
        self.drug_classes
            .insert(prefix.trim().to_ascii_uppercase(), class);
        self
    }

    /// Builds the reference
    pub fn build(self) -> CrosswalkReference {
        CrosswalkReference {
            diagnosis_families: self.diagnosis_families,
            complication_codes: self.complication_codes,
            remission_codes: self.remission_codes,
            unspecified_complication_codes: self.unspecified_complication_codes,
            drug_classes: self.drug_classes,
        }
    }
}
