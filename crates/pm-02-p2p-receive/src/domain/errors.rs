//! # Receipt Errors
//!
//! One variant per pipeline failure. Every variant is terminal for the
//! request and names exactly one stage.

use thiserror::Error;

/// HTTP status codes used by the receipt contract.
pub mod status {
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const EXPECTATION_FAILED: u16 = 417;
}

/// Paymail server error codes.
pub mod codes {
    pub const INVALID_PARAMETER: &str = "invalid-parameter";
    pub const UNKNOWN_DOMAIN: &str = "unknown-domain";
    pub const MISSING_HEX: &str = "missing-hex";
    pub const MISSING_REFERENCE: &str = "missing-reference";
    pub const INVALID_SIGNATURE: &str = "invalid-signature";
    pub const INVALID_PUBKEY: &str = "invalid-pubkey";
    pub const ERROR_FINDING_PAYMAIL: &str = "error-finding-paymail";
    pub const PAYMAIL_NOT_FOUND: &str = "not-found";
    pub const ERROR_RECORDING_TX: &str = "error-recording-tx";
}

/// Errors returned by the receipt pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReceiveError {
    /// Stage 1: the address normalized to nothing
    #[error("invalid paymail: {0}")]
    InvalidAddress(String),

    /// Stage 2: domain not on the allow-list
    #[error("domain unknown: {0}")]
    UnknownDomain(String),

    /// Stage 3
    #[error("missing parameter: hex")]
    MissingHex,

    /// Stage 3
    #[error("missing parameter: reference")]
    MissingReference,

    /// Stage 4: hex did not decode to a transaction
    #[error("invalid parameter: hex: {0}")]
    InvalidTransaction(String),

    /// Stage 5a
    #[error("missing parameter: signature")]
    MissingSignature,

    /// Stage 5a
    #[error("missing parameter: pubkey")]
    MissingPubKey,

    /// Stage 5b: no address could be recovered from the key
    #[error("invalid pubkey: {0}")]
    InvalidPubKey(String),

    /// Stage 5c: signature does not match txid and key
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Stage 6: directory failed; message passed through unmodified
    #[error("{0}")]
    LookupFailed(String),

    /// Stage 6: directory has no such paymail
    #[error("paymail not found")]
    RecordNotFound,

    /// Stage 7: ledger failed; message passed through unmodified
    #[error("{0}")]
    RecordingFailed(String),
}

impl ReceiveError {
    /// HTTP status for this failure.
    pub fn http_status(&self) -> u16 {
        match self {
            ReceiveError::RecordNotFound => status::NOT_FOUND,
            ReceiveError::LookupFailed(_) | ReceiveError::RecordingFailed(_) => {
                status::EXPECTATION_FAILED
            }
            _ => status::BAD_REQUEST,
        }
    }

    /// Paymail server error code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            ReceiveError::InvalidAddress(_) | ReceiveError::InvalidTransaction(_) => {
                codes::INVALID_PARAMETER
            }
            ReceiveError::UnknownDomain(_) => codes::UNKNOWN_DOMAIN,
            ReceiveError::MissingHex => codes::MISSING_HEX,
            ReceiveError::MissingReference => codes::MISSING_REFERENCE,
            ReceiveError::MissingSignature | ReceiveError::InvalidSignature(_) => {
                codes::INVALID_SIGNATURE
            }
            ReceiveError::MissingPubKey | ReceiveError::InvalidPubKey(_) => codes::INVALID_PUBKEY,
            ReceiveError::LookupFailed(_) => codes::ERROR_FINDING_PAYMAIL,
            ReceiveError::RecordNotFound => codes::PAYMAIL_NOT_FOUND,
            ReceiveError::RecordingFailed(_) => codes::ERROR_RECORDING_TX,
        }
    }
}
