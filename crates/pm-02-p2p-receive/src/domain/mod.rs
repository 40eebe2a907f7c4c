//! # Domain Layer
//!
//! Pure types and rules with no I/O dependencies.

pub mod config;
pub mod entities;
pub mod errors;
pub mod sanitize;
