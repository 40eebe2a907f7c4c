//! # Paymail Test Suite
//!
//! Cross-crate flows that exercise the wired node the way a Paymail host
//! would.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (id generation, receipt)
//! └── src/
//!     ├── fixtures.rs   # Known transactions and request bodies
//!     └── integration/  # BRFC and receipt flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pm-tests
//! cargo bench -p pm-tests
//! ```

pub mod fixtures;
pub mod integration;
