//! Crosswalk domain errors

use thiserror::Error;

/// Errors that can occur loading or validating a crosswalk reference
///
/// These are the only fatal errors in the system: a reference missing a
/// required category cannot support evaluation, so construction fails before
/// any claim is processed.
#[derive(Debug, Error)]
pub enum CrosswalkError {
    /// A required category is absent or empty
    #[error("Crosswalk reference is missing required category: {0}")]
    MissingCategory(&'static str),

    /// The reference could not be parsed from its serialized form
    #[error("Failed to parse crosswalk reference: {0}")]
    Parse(#[from] serde_json::Error),
}
