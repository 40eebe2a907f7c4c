//! # Integration Flows
//!
//! - `brfc_flows`: spec list loading, registry lookups, both id schemes
//! - `receive_flows`: the receipt pipeline wired with the Bitcoin verifier

mod brfc_flows;
mod receive_flows;
