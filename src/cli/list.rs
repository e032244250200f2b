//! `assetref list`: show what a location renders.
//!
//! Every manifest module is referenced under its preferred location, as a page
//! referencing all of them would, and the chosen location is expanded and sorted.
//!
//! ```text
//! $ assetref list --location body
//! script      ~/scripts/lib    /_assets/scripts/scripts/lib_3f2a...
//! script      ~/scripts/app    /_assets/scripts/scripts/app_9c1e...
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::rc::Rc;

use crate::config::BundleManifest;
use crate::core::Location;
use crate::module::{ModuleKind, ModuleRef};
use crate::page::Page;

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One module per line
    Text,
    /// JSON array
    Json,
}

/// List the modules rendered for a location, in load order.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Location to list; the default location when omitted
    #[arg(short, long)]
    location: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,
}

/// One listed module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleListing {
    pub path: String,
    pub kind: ModuleKind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub assets: Vec<String>,
}

impl ListCommand {
    pub fn execute(self, manifest: &BundleManifest) -> Result<()> {
        let listings = self.collect(manifest)?;

        match self.format {
            ListFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
            ListFormat::Text => {
                if listings.is_empty() {
                    println!("No modules for location {}", Location::from_option(self.location.as_deref()));
                }
                for listing in &listings {
                    println!("{:<11} {:<24} {}", listing.kind.to_string(), listing.path, listing.url);
                }
            }
        }

        Ok(())
    }

    pub fn collect(&self, manifest: &BundleManifest) -> Result<Vec<ModuleListing>> {
        let application = Rc::new(manifest.build_application());
        let container = Rc::new(manifest.build_container()?);
        let page = Page::new(Rc::clone(&container), Rc::clone(&application));

        let collector = page.collector();
        for module in container.modules() {
            collector.add_reference(Rc::clone(module), module.location());
        }

        let items = collector.get_items(Location::from_option(self.location.as_deref()))?;
        let generator = application.url_generator();

        Ok(items
            .iter()
            .map(|module: &ModuleRef| ModuleListing {
                path: module.path().to_string(),
                kind: module.kind(),
                url: generator.module_url(&**module),
                location: module.location().name().map(str::to_string),
                assets: module.assets().to_vec(),
            })
            .collect())
    }
}
