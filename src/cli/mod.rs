//! Command-line interface for assetref.
//!
//! # Commands
//!
//! - `render` - process a page template and print the finalized page
//! - `url` - print the URL of the module owning a path
//! - `list` - print the modules a location renders, in load order
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - debug logging
//! - `--quiet` / `-q` - errors only
//! - `--manifest <PATH>` - bundle manifest (default `assetref.toml`)
//!
//! `RUST_LOG` takes precedence over `--verbose` and `--quiet`.
//!
//! # Examples
//!
//! ```bash
//! assetref render pages/index.html
//! assetref --manifest site/assetref.toml render --debug-assets pages/index.html
//! assetref url ~/scripts/app
//! assetref list --location body --format json
//! ```

mod list;
mod render;
mod url;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::BundleManifest;
use crate::constants::MANIFEST_FILE_NAME;

pub use list::{ListCommand, ListFormat};
pub use render::RenderCommand;
pub use url::UrlCommand;

/// Settings derived from global flags, applied before a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Install the global tracing subscriber.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Render pages with collected asset references.
#[derive(Parser, Debug)]
#[command(
    name = "assetref",
    about = "Collect asset references per page location and render them",
    version,
    long_about = "assetref processes page templates that reference script and stylesheet \
                  bundles declared in a bundle manifest, and renders the tags for each page \
                  location in dependency order."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the bundle manifest
    #[arg(long, global = true, value_name = "PATH", default_value = MANIFEST_FILE_NAME)]
    manifest: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process a page template and print the finalized page
    Render(RenderCommand),

    /// Print the URL of the module owning a path
    Url(UrlCommand),

    /// List the modules rendered for a location, in load order
    List(ListCommand),
}

impl Cli {
    /// Set up logging and run the selected command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
        }
    }

    /// Run the selected command. Logging must already be configured.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        tracing::debug!("Running with log level {}", config.log_level);

        let manifest = BundleManifest::load(&self.manifest).await?;
        match self.command {
            Commands::Render(cmd) => cmd.execute(&manifest).await,
            Commands::Url(cmd) => cmd.execute(&manifest),
            Commands::List(cmd) => cmd.execute(&manifest),
        }
    }
}
