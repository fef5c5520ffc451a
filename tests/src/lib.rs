//! # XCID Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/           # Cross-component flows
//!     ├── identity_lifecycle.rs
//!     └── intent_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p xcid-tests
//!
//! # By category
//! cargo test -p xcid-tests integration::
//! ```

#![allow(unused_imports)]

pub mod integration;
