//! Claim domain errors

use thiserror::Error;

/// Errors that can occur in the claim domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim {claim_id} has no diagnosis codes and no drug codes")]
    EmptyClaim { claim_id: String },
}
