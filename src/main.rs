//! assetref CLI entry point
//!
//! Parses arguments, runs the command, and prints failures through
//! [`user_friendly_error`] before exiting with status 1.
//!
//! - `render` - process a page template
//! - `url` - resolve a path to its module URL
//! - `list` - show the modules a location renders

use anyhow::Result;
use assetref::cli;
use assetref::core::error::user_friendly_error;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
