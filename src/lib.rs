//! assetref - per-page asset reference collection
//!
//! Pages reference the script and stylesheet bundles they need while they are being
//! produced, grouped by named page locations (`head`, `body`, ...). Each location is
//! rendered as a placeholder token wherever the page asks for it, and the tokens are
//! replaced with the final tags once the page is complete, so a reference added near
//! the bottom of a page still lands in a location rendered near the top.
//!
//! # Architecture Overview
//!
//! - A bundle manifest (`assetref.toml`) declares the application's modules: their
//!   paths, assets, preferred locations, and the modules they depend on
//! - A [`container::ModuleContainer`] owns those modules, finds the module owning a
//!   path, and orders a set of modules so that every dependency precedes its
//!   dependents
//! - A [`collector::ReferenceCollector`] records references per location for one
//!   page and hands out placeholders for rendered locations
//! - A [`placeholder::PlaceholderTracker`] maps placeholder tokens to deferred
//!   markup producers and finalizes the document in one pass
//!
//! # Core Modules
//!
//! ## Reference collection
//! - [`collector`] - per-page references grouped by location, lazy rendering
//! - [`placeholder`] - placeholder tokens and document finalization
//! - [`page`] - template directives driving a collector for one page
//!
//! ## Modules and ordering
//! - [`module`] - script, stylesheet and external modules
//! - [`container`] - module lookup and dependency ordering
//! - [`factory`] - ad-hoc modules for absolute URLs
//!
//! ## Output
//! - [`application`] - output mode and URL generation settings
//! - [`url_generator`] - module and asset URLs
//!
//! ## Supporting Modules
//! - [`cli`] - command-line interface
//! - [`config`] - bundle manifest parsing and validation
//! - [`core`] - error types and [`core::Location`]
//! - [`utils`] - path normalization and HTML escaping
//!
//! # Template Directives
//!
//! Directives occupy a whole line; every other line is copied through.
//!
//! ```text
//! <head>
//! @render head
//! </head>
//! <body>
//! @reference ~/scripts/app
//! @reference https://cdn.example.com/analytics.js body
//! @url ~/scripts/app
//! @render body
//! </body>
//! ```
//!
//! # Threading
//!
//! A collector and its tracker belong to one page render and use `Rc`/`RefCell`
//! internally. Render pages concurrently by giving each its own [`page::Page`].

// Reference collection
pub mod collector;
pub mod page;
pub mod placeholder;

// Modules and ordering
pub mod container;
pub mod factory;
pub mod module;

// Output
pub mod application;
pub mod url_generator;

// Supporting modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod utils;

// Test utilities (available for both unit and integration tests)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
