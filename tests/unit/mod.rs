//! Library test suite for assetref
//!
//! Exercises the reference collector and page processing through the public API,
//! using the sample modules from `assetref::test_utils`.
//!
//! ```bash
//! cargo test --test unit
//! ```
//!
//! # Test Organization
//!
//! - **collector**: registration, location handling, ordering and late binding
//! - **page**: template processing from directives to finalized HTML

mod collector;
