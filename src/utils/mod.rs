//! Supporting utilities.
//!
//! - [`path`] - app-relative path normalization and URL detection
//! - [`html`] - attribute escaping for rendered tags

pub mod html;
pub mod path;

pub use path::{app_relative, is_absolute_url};
