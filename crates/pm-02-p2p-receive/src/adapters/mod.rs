//! # Adapters Module
//!
//! Infrastructure adapters implementing the ports.
//!
//! - `bitcoin`: `TransactionVerifier` backed by `shared-crypto`
//! - `memory`: in-memory `PaymailDirectory` and `TransactionLedger`
//! - `http`: request/response mapping for the receipt endpoint

pub mod bitcoin;
pub mod http;
pub mod memory;

pub use bitcoin::BitcoinVerifier;
pub use http::{respond, respond_json, ApiResponse, ErrorBody, P2pTransactionRequest};
pub use memory::{InMemoryDirectory, InMemoryLedger, LedgerEntry};
