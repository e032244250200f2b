//! `assetref render`: process a page template.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::rc::Rc;
use tokio::fs;

use crate::application::AssetApplication;
use crate::config::BundleManifest;
use crate::page::Page;

/// Process a page template and print the finalized page.
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Page template to process
    page: PathBuf,

    /// Render one tag per asset instead of one per module
    #[arg(long)]
    debug_assets: bool,

    /// Prefix for generated URLs, overriding the manifest
    #[arg(long, value_name = "PREFIX")]
    url_prefix: Option<String>,

    /// Write the page to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

impl RenderCommand {
    pub async fn execute(self, manifest: &BundleManifest) -> Result<()> {
        let template = fs::read_to_string(&self.page)
            .await
            .with_context(|| format!("Failed to read page template {}", self.page.display()))?;

        let html = self.render(manifest, &template)?;

        match &self.output {
            Some(path) => {
                fs::write(path, &html)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::debug!("Wrote {} bytes to {}", html.len(), path.display());
            }
            None => print!("{html}"),
        }

        Ok(())
    }

    /// Render `template` with the manifest's modules and the flag overrides applied.
    pub fn render(&self, manifest: &BundleManifest, template: &str) -> Result<String> {
        let mut settings = manifest.settings.clone();
        if let Some(prefix) = &self.url_prefix {
            settings.url_prefix.clone_from(prefix);
        }
        if self.debug_assets {
            settings.optimize = false;
        }

        let container = Rc::new(manifest.build_container()?);
        let application = Rc::new(AssetApplication::from_settings(&settings));

        let mut page = Page::new(container, application);
        page.process_template(template)
            .with_context(|| format!("Failed to process {}", self.page.display()))?;
        page.finish()
    }
}
