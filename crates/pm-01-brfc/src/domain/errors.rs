//! # BRFC Errors

use thiserror::Error;

/// Errors from generating, validating or loading BRFC specifications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BrfcError {
    /// A required descriptive field is empty, or there is no id to check
    #[error("Invalid BRFC spec: {0}")]
    InvalidSpec(String),

    /// A published id does not match the one derived from the fields
    #[error("BRFC id mismatch for '{title}': expected {expected}, got {actual}")]
    IdMismatch {
        title: String,
        expected: String,
        actual: String,
    },

    /// A spec list could not be parsed
    #[error("Failed to parse BRFC specs: {0}")]
    Parse(String),
}
