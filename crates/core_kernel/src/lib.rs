//! Core Kernel - Foundational types and utilities for the claims integrity system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Clinical code value objects (ICD-10 diagnosis codes, NDC/drug-class codes)
//! - Common identifiers and value objects
//! - Core error types

pub mod codes;
pub mod identifiers;
pub mod error;

pub use codes::{DiagnosisCode, DrugCode, CodeError};
pub use identifiers::{ClaimId, BeneficiaryId, BatchId};
pub use error::CoreError;
