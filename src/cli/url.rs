//! `assetref url`: resolve a path to its module URL.

use anyhow::Result;
use clap::Args;
use std::rc::Rc;

use crate::config::BundleManifest;
use crate::page::Page;

/// Print the URL of the module owning a path.
#[derive(Args, Debug)]
pub struct UrlCommand {
    /// Module or asset path, e.g. `~/scripts/app` or `scripts/app/main.js`
    path: String,
}

impl UrlCommand {
    pub fn execute(self, manifest: &BundleManifest) -> Result<()> {
        println!("{}", self.resolve(manifest)?);
        Ok(())
    }

    pub fn resolve(&self, manifest: &BundleManifest) -> Result<String> {
        let page = Page::new(
            Rc::new(manifest.build_container()?),
            Rc::new(manifest.build_application()),
        );
        page.collector().resolve_url(&self.path)
    }
}
