//! Core types for assetref
//!
//! This module holds the pieces every other module depends on:
//!
//! - [`error`] - [`AssetError`], the typed failure for every operation, and
//!   [`ErrorContext`] / [`user_friendly_error`] for CLI display
//! - [`location`] - [`Location`], the normalized key for a page insertion point
//!
//! # Error Handling Pattern
//!
//! ```rust
//! use assetref::core::{AssetError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn lookup() -> Result<String> {
//!     Err(AssetError::ModuleNotFound { path: "~/scripts/app.js".into() }.into())
//! }
//!
//! if let Err(e) = lookup() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;
pub mod location;

pub use error::{AssetError, ErrorContext, user_friendly_error};
pub use location::Location;
