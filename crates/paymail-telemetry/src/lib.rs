//! # Paymail Telemetry
//!
//! Structured logging for Paymail services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paymail_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `paymail-node` | Service name in logs |
//! | `PM_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `PM_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `PM_JSON_LOGS` | `false` (`true` in containers) | JSON formatted events |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for a Paymail process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_tracing(config)
}

/// Create an info span tagged with the component that emits it.
///
/// # Example
///
/// ```rust,ignore
/// let _span = paymail_telemetry::component_span!("receive", component = "p2p", reference = %reference).entered();
/// ```
#[macro_export]
macro_rules! component_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
