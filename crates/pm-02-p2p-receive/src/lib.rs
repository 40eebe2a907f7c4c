//! # P2P Transaction Receipt (PM-02)
//!
//! Accepts a transaction delivered directly to a Paymail service, validates
//! it and hands it to the ledger for recording and broadcast.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Entities, errors, configuration, address sanitation
//! - **Ports Layer** (`ports/`): Inbound API and outbound collaborator traits
//! - **Service Layer** (`service.rs`): The receipt pipeline
//! - **Adapters Layer** (`adapters/`): Bitcoin verifier, in-memory collaborators, HTTP mapping
//!
//! ## Pipeline
//!
//! ```text
//! sanitize address → authorize domain → required fields → decode tx
//!     → [verify sender signature] → directory lookup → ledger record
//! ```
//!
//! The first five stages never touch a collaborator: malformed submissions
//! are rejected before any I/O happens.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::config::{ConfigError, ReceiverConfig};
pub use domain::entities::{
    AddressInformation, DecodedTransaction, PaymailAddress, ReceiptPayload, RequestContext,
    RequestMetadata, SenderMetadata, SubmittedTransaction,
};
pub use domain::errors::ReceiveError;
pub use domain::sanitize::PaymailSanitizer;
pub use ports::inbound::P2pReceiveApi;
pub use ports::outbound::{
    AddressSanitizer, DirectoryError, LedgerError, PaymailDirectory, TransactionLedger,
    TransactionVerifier, VerifierError,
};
pub use service::{P2pReceiveService, ValidatedSubmission};
