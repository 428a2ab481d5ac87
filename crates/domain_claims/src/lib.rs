//! Claim Record Domain
//!
//! This crate defines the claim record as it arrives from the upstream
//! ingestion collaborator: an identifier plus two sets of clinical codes,
//! optionally annotated with the beneficiary and service date carried by the
//! source feed.
//!
//! Claims are immutable inputs. The integrity engine borrows a claim for the
//! duration of one evaluation and never retains or mutates it.

pub mod claim;
pub mod error;

pub use claim::Claim;
pub use error::ClaimError;
