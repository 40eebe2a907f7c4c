//! # BRFC Specification Identifiers (PM-01)
//!
//! A BRFC ("Bitcoin Request For Comments") describes one Paymail capability.
//! Its identifier is derived from the descriptive fields, never assigned:
//!
//! ```text
//! id = truncate(sha256d(trim(title) ++ trim(author) ++ trim(version)))
//! ```
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): descriptor entity, id schemes, spec lists
//!
//! ## Example
//!
//! ```
//! use pm_01_brfc::BrfcSpec;
//!
//! let mut spec = BrfcSpec::new("BRFC Specifications", "andy (nChain)", "1");
//! let id = spec.generate().unwrap();
//! assert_eq!(id.as_str(), "57dd1f54fc67");
//! ```

pub mod domain;

// Re-export public API
pub use domain::entities::{BrfcId, BrfcSpec};
pub use domain::errors::BrfcError;
pub use domain::generator::{generate_id, BrfcIdScheme};
pub use domain::registry::{load_specs, BrfcRegistry};
