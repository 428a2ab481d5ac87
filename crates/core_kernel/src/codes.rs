//! Clinical code value objects
//!
//! Diagnosis and drug codes are the raw material of claim validation. Both
//! are stored normalized (trimmed, uppercased) so that crosswalk lookups and
//! set membership behave the same regardless of how the upstream feed cased
//! them. Codes are ordered so that code sets iterate deterministically.
//!
//! A `DiagnosisCode` knows its ICD-10 family (the prefix before the `.`
//! separator, e.g. `E11.42` belongs to family `E11`). Everything beyond the
//! family - complication linkage, remission status, therapeutic class - is
//! derived by the classifier from the crosswalk reference, never stored on
//! the code itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when constructing code value objects
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("diagnosis code cannot be empty")]
    EmptyDiagnosisCode,

    #[error("drug code cannot be empty")]
    EmptyDrugCode,
}

/// An ICD-10 diagnosis code
///
/// Serialized as a plain string; deserialization runs the same
/// normalization and validation as [`DiagnosisCode::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiagnosisCode(String);

impl DiagnosisCode {
    /// Creates a diagnosis code, normalizing case and surrounding whitespace
    pub fn new(code: impl AsRef<str>) -> Result<Self, CodeError> {
        let normalized = code.as_ref().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(CodeError::EmptyDiagnosisCode);
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized code string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the ICD-10 family prefix
    ///
    /// The family is the portion before the `.` separator: `E11.42` -> `E11`,
    /// `G62.9` -> `G62`. A code without a separator is its own family.
    pub fn family(&self) -> &str {
        match self.0.split_once('.') {
            Some((family, _)) => family,
            None => &self.0,
        }
    }

    /// Returns true if the code belongs to the given family prefix
    pub fn in_family(&self, family: &str) -> bool {
        self.family().eq_ignore_ascii_case(family)
    }
}

impl fmt::Display for DiagnosisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DiagnosisCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DiagnosisCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiagnosisCode> for String {
    fn from(code: DiagnosisCode) -> String {
        code.0
    }
}

/// An NDC or drug-class identifier
///
/// Upstream feeds mix true NDCs with internal drug-class codes such as
/// `RX_GLP1_OZEMPIC`; both are treated as opaque lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DrugCode(String);

impl DrugCode {
    /// Creates a drug code, normalizing case and surrounding whitespace
    pub fn new(code: impl AsRef<str>) -> Result<Self, CodeError> {
        let normalized = code.as_ref().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(CodeError::EmptyDrugCode);
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized code string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrugCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DrugCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DrugCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DrugCode> for String {
    fn from(code: DrugCode) -> String {
        code.0
    }
}
