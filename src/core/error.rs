//! Error handling for assetref
//!
//! This module provides the error types raised while collecting and rendering asset
//! references, plus a user-friendly wrapper used by the CLI. The error system follows
//! two principles:
//! 1. **Strongly-typed errors** so callers can match on the failure
//! 2. **User-friendly messages** with actionable suggestions for page authors
//!
//! # Error Categories
//!
//! - **References**: [`AssetError::ModuleNotFound`], [`AssetError::UnresolvedReference`]
//! - **Ordering**: [`AssetError::CircularDependency`]
//! - **Configuration**: [`AssetError::ManifestNotFound`], [`AssetError::InvalidManifest`],
//!   [`AssetError::DuplicateModule`], [`AssetError::TomlError`]
//! - **Pages**: [`AssetError::InvalidDirective`]
//!
//! Library operations return [`anyhow::Result`] with an [`AssetError`] at the root of the
//! chain, so callers can recover the typed error with `downcast_ref`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use assetref::core::{AssetError, user_friendly_error};
//!
//! let error = anyhow::Error::from(AssetError::ModuleNotFound {
//!     path: "~/scripts/missing.js".to_string(),
//! });
//! let ctx = user_friendly_error(error);
//! ctx.display(); // coloured output with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for assetref operations.
///
/// Every variant carries the path, module, or line that caused the failure so the
/// message is useful without a backtrace. None of these failures are retried: they
/// indicate a page-authoring or manifest problem.
#[derive(Error, Debug, Clone)]
pub enum AssetError {
    /// No module contains the referenced path, and the path is not an absolute URL.
    #[error("Cannot find an asset module containing the path \"{path}\"")]
    ModuleNotFound {
        /// The app-relative path that failed to resolve
        path: String,
    },

    /// A module declares a reference that no module in the container satisfies.
    #[error("Module \"{module}\" references \"{reference}\", which no module contains")]
    UnresolvedReference {
        /// Path of the module declaring the reference
        module: String,
        /// The reference that could not be resolved
        reference: String,
    },

    /// Module references form a cycle.
    #[error("Circular dependency detected: {}", .chain.join(" → "))]
    CircularDependency {
        /// Module paths along the cycle, with the first repeated at the end
        chain: Vec<String>,
    },

    /// Two modules in one container share a path.
    #[error("Duplicate module path \"{path}\"")]
    DuplicateModule {
        /// The duplicated module path
        path: String,
    },

    /// The bundle manifest file does not exist.
    #[error("Bundle manifest not found: {path}")]
    ManifestNotFound {
        /// Path that was looked up
        path: String,
    },

    /// The manifest parsed but its contents are inconsistent.
    #[error("Invalid bundle manifest: {reason}")]
    InvalidManifest {
        /// What was wrong
        reason: String,
    },

    /// A page template line starting with `@` is not a known directive.
    #[error("Invalid directive on line {line}: {directive}")]
    InvalidDirective {
        /// 1-based line number in the template
        line: usize,
        /// The offending line, trimmed
        directive: String,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Anything else, carried as a message
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl From<std::io::Error> for AssetError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}

impl From<toml::de::Error> for AssetError {
    fn from(error: toml::de::Error) -> Self {
        Self::TomlError(error.to_string())
    }
}

/// Error wrapper that adds a suggestion and details for display.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: AssetError,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Extra background on why it happened
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error without a suggestion or details.
    #[must_use]
    pub const fn new(error: AssetError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colours.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with suggestions where the cause is known.
///
/// The whole `anyhow` chain is searched for an [`AssetError`], so errors wrapped with
/// `.context(...)` still get a specific suggestion.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(asset_error) = error.chain().find_map(|e| e.downcast_ref::<AssetError>()) {
        return create_error_context(asset_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>()
        && io_error.kind() == std::io::ErrorKind::NotFound
    {
        return ErrorContext::new(AssetError::IoError(io_error.to_string()))
            .with_suggestion("Check that the file exists and the path is correct");
    }

    ErrorContext::new(AssetError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: AssetError) -> ErrorContext {
    match &error {
        AssetError::ModuleNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Add a module containing this path to the bundle manifest, or reference an absolute http(s) URL")
            .with_details("Paths are matched against module paths and their assets, ignoring case"),
        AssetError::UnresolvedReference {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Declare the referenced module in the manifest or remove the reference"),
        AssetError::CircularDependency {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Break the cycle by removing one of the references along the chain"),
        AssetError::DuplicateModule {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Module paths must be unique (comparison ignores case)"),
        AssetError::ManifestNotFound {
            ..
        } => ErrorContext::new(error).with_suggestion(format!(
            "Create {} or pass --manifest <FILE>",
            crate::constants::MANIFEST_FILE_NAME
        )),
        AssetError::InvalidDirective {
            ..
        } => ErrorContext::new(error).with_details(
            "Supported directives: @reference <path> [location], @render [location], @url <path>",
        ),
        AssetError::InvalidManifest {
            ..
        }
        | AssetError::TomlError(_) => ErrorContext::new(error)
            .with_suggestion("Check the manifest syntax; see the [settings] and [[modules]] tables"),
        AssetError::IoError(_)
        | AssetError::Other {
            ..
        } => ErrorContext::new(error),
    }
}
