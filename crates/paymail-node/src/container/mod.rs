//! # Container
//!
//! Configuration and dependency injection for the node.

pub mod config;
pub mod services;

pub use config::{ConfigError, NodeConfig};
pub use services::{ReceiveService, ServiceContainer};
