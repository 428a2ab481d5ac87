//! Strongly-typed identifiers for domain entities
//!
//! Claim and beneficiary identifiers are assigned by the upstream ingestion
//! system and arrive as opaque strings (e.g. `CLM-001`). Newtype wrappers
//! prevent accidental mixing of different identifier types. Batch runs are
//! identified locally with time-ordered UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_external_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from an upstream-assigned value.
            ///
            /// Rejects empty or blank values; identifiers are otherwise opaque.
            pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(CoreError::validation(concat!(
                        $label,
                        " identifier cannot be empty"
                    )));
                }
                Ok(Self(value))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

// Identifiers owned by the upstream ingestion collaborator
define_external_id!(ClaimId, "claim");
define_external_id!(BeneficiaryId, "beneficiary");

/// Identifier for one batch evaluation run
///
/// Minted locally per `evaluate_batch` invocation so downstream reporting can
/// correlate the verdicts of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(Uuid);

impl BatchId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BAT-{}", self.0)
    }
}

impl FromStr for BatchId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid_str = s.strip_prefix("BAT-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_round_trip() {
        let id = ClaimId::new("CLM-001").unwrap();
        assert_eq!(id.as_str(), "CLM-001");
        assert_eq!(id.to_string(), "CLM-001");
    }

    #[test]
    fn test_claim_id_rejects_blank() {
        assert!(ClaimId::new("").is_err());
        assert!(ClaimId::new("   ").is_err());
    }

    #[test]
    fn test_beneficiary_id_parsing() {
        let parsed: BeneficiaryId = "BENE-42".parse().unwrap();
        assert_eq!(parsed.as_str(), "BENE-42");
    }

    #[test]
    fn test_batch_id_display() {
        let id = BatchId::new();
        assert!(id.to_string().starts_with("BAT-"));
    }

    #[test]
    fn test_batch_id_parsing() {
        let original = BatchId::new();
        let parsed: BatchId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}
