//! Claims Integrity Domain
//!
//! This crate implements the rule-based integrity engine: a fixed set of
//! clinical-coding consistency rules evaluated per claim, producing one
//! [`Verdict`] per claim with zero or more [`Finding`]s.
//!
//! # Evaluation flow
//!
//! ```text
//! Claim -> classify once -> run registered rules in order -> Verdict
//! ```
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{ClaimId, DiagnosisCode};
//! use domain_claims::Claim;
//! use domain_crosswalk::CrosswalkReference;
//! use domain_integrity::IntegrityEngine;
//!
//! # fn main() -> Result<(), domain_integrity::IntegrityError> {
//! let engine = IntegrityEngine::with_standard_rules(
//!     CrosswalkReference::model_2026().clone(),
//! )?;
//!
//! let claim = Claim::new(
//!     ClaimId::new("CLM-001").expect("valid id"),
//!     vec![
//!         DiagnosisCode::new("E11.9").expect("valid code"),
//!         DiagnosisCode::new("G62.9").expect("valid code"),
//!     ],
//!     vec![],
//! );
//!
//! let verdict = engine.evaluate(&claim);
//! assert!(!verdict.has_blocking_error);
//! assert_eq!(verdict.findings.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod finding;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;
pub mod verdict;

pub use engine::IntegrityEngine;
pub use error::IntegrityError;
pub use finding::{Finding, RuleId, Severity};
pub use registry::RuleRegistry;
pub use report::{finding_records, FindingRecord};
pub use rule::IntegrityRule;
pub use rules::{
    DiagnosisTypeConflictRule, DrugSupportRule, RemissionConflictRule, SpecificityGapRule,
};
pub use verdict::Verdict;
