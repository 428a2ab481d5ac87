//! Integrity domain errors

use thiserror::Error;

use domain_crosswalk::CrosswalkError;

/// Errors that can occur in the integrity domain
///
/// Evaluation itself has no error path; only engine construction can fail,
/// and only on a misconfigured crosswalk reference.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("Engine configuration error: {0}")]
    Configuration(#[from] CrosswalkError),
}
