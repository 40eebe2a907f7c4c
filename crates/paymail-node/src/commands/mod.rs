//! # Commands
//!
//! Library side of the `paymail-node` subcommands. Each returns its output
//! instead of printing it.

pub mod brfc;
pub mod receive;

pub use receive::ReceiveOptions;
