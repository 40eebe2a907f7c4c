//! # Paymail Node Library
//!
//! Exposes the runtime container and commands for testing. The main entry
//! point is the `main.rs` binary.
//!
//! - `container/` - Configuration and service wiring
//! - `commands/` - BRFC tooling and single-submission receipt

pub mod commands;
pub mod container;

pub use container::{ConfigError, NodeConfig, ServiceContainer};
