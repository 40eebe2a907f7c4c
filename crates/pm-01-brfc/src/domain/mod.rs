//! # Domain Layer
//!
//! Pure identifier logic with no I/O dependencies.

pub mod entities;
pub mod errors;
pub mod generator;
pub mod registry;
