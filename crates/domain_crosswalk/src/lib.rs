//! Crosswalk Reference Domain
//!
//! This crate owns the mapping from raw clinical codes to the domain concepts
//! the integrity rules reason about: diagnosis families (Type 1 vs Type 2
//! diabetes), complication linkage, remission status, and therapeutic drug
//! classes.
//!
//! The mapping has two halves:
//! - [`CrosswalkReference`]: the lookup tables, supplied as configuration at
//!   engine construction and immutable for the lifetime of a run. A built-in
//!   table for the 2026 RxHCC model is available via
//!   [`CrosswalkReference::model_2026`].
//! - [`CodeClassifier`]: a pure function from a claim to the boolean facts
//!   ([`ClassifiedClaim`]) consumed by every rule. Classification is total -
//!   unknown codes map to `Other` and never fail.

pub mod classifier;
pub mod reference;
pub mod error;

pub use classifier::{ClassifiedClaim, CodeClassifier, DiagnosisCategory};
pub use reference::{CrosswalkReference, DiagnosisFamily, TherapeuticClass};
pub use error::CrosswalkError;
