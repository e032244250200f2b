//! Asset modules: the units references are collected for.
//!
//! A module is one bundle of assets (a script bundle or a stylesheet bundle) with an
//! app-relative path, an optional preferred [`Location`], the paths of the modules it
//! depends on, and the ability to render itself to markup for an
//! [`AssetApplication`].
//!
//! Modules are shared as [`ModuleRef`] (`Rc<dyn AssetModule>`). Identity is the
//! allocation: two handles refer to the same module when [`same_module`] is true,
//! regardless of path.
//!
//! # Kinds
//!
//! - [`ScriptModule`] / [`StylesheetModule`] - modules declared in the bundle manifest
//! - [`ExternalScriptModule`] / [`ExternalStylesheetModule`] - ad-hoc modules for
//!   absolute URLs, created by a [`crate::factory::ModuleFactory`]

mod external;
mod script;
mod stylesheet;

pub use external::{ExternalScriptModule, ExternalStylesheetModule};
pub use script::ScriptModule;
pub use stylesheet::StylesheetModule;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::rc::Rc;

use crate::application::AssetApplication;
use crate::core::Location;
use crate::utils::path::{app_relative, is_absolute_url, paths_equal};

/// Shared handle to a module.
pub type ModuleRef = Rc<dyn AssetModule>;

/// Whether two handles point at the same module instance.
pub fn same_module(a: &ModuleRef, b: &ModuleRef) -> bool {
    // Compare data pointers only; vtable pointers may differ across codegen units.
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// The kind of asset a module bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// JavaScript bundle
    Script,
    /// CSS bundle
    Stylesheet,
}

impl ModuleKind {
    /// Directory segment used in generated module URLs.
    pub const fn url_segment(self) -> &'static str {
        match self {
            Self::Script => "scripts",
            Self::Stylesheet => "styles",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script => write!(f, "script"),
            Self::Stylesheet => write!(f, "stylesheet"),
        }
    }
}

/// Capabilities every module provides.
pub trait AssetModule: fmt::Debug {
    /// App-relative path identifying the module, or the URL for external modules.
    fn path(&self) -> &str;

    /// Script or stylesheet.
    fn kind(&self) -> ModuleKind;

    /// Preferred location; [`Location::Default`] when the module has none.
    fn location(&self) -> &Location;

    /// Paths of the modules this module depends on, in declared order.
    fn references(&self) -> &[String] {
        &[]
    }

    /// Asset paths relative to the module path, in declared order.
    fn assets(&self) -> &[String] {
        &[]
    }

    /// Hex-encoded content hash used to version URLs.
    fn hash(&self) -> String {
        compute_hash(self.path(), self.assets())
    }

    /// Whether the module points at an absolute URL outside the application.
    fn is_external(&self) -> bool {
        false
    }

    /// Whether `path` names this module or one of its assets (ignoring case).
    fn contains_path(&self, path: &str) -> bool {
        paths_equal(self.path(), path)
            || self.assets().iter().any(|asset| paths_equal(&asset_path(self.path(), asset), path))
    }

    /// Render the module to markup.
    fn render(&self, application: &AssetApplication) -> String;
}

/// Data shared by the manifest-declared module kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    path: String,
    location: Location,
    assets: Vec<String>,
    references: Vec<String>,
}

impl ModuleInfo {
    /// Create module info for `path`, normalized to app-relative form.
    pub fn new(path: &str) -> Self {
        Self {
            path: app_relative(path),
            location: Location::Default,
            assets: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Set the preferred location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<Location>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the assets, relative to the module path.
    #[must_use]
    pub fn with_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.assets = assets.into_iter().map(|a| normalize_asset(a.as_ref())).collect();
        self
    }

    /// Set the referenced module paths. Non-URL references are made app-relative.
    #[must_use]
    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.references = references
            .into_iter()
            .map(|r| {
                let r = r.as_ref();
                if is_absolute_url(r) {
                    r.trim().to_string()
                } else {
                    app_relative(r)
                }
            })
            .collect();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }
}

/// Join a module path and a module-relative asset path.
pub fn asset_path(module_path: &str, asset: &str) -> String {
    if module_path.ends_with('/') {
        format!("{module_path}{asset}")
    } else {
        format!("{module_path}/{asset}")
    }
}

/// SHA-256 over the module path and its asset list.
pub fn compute_hash(path: &str, assets: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    for asset in assets {
        hasher.update(b"\n");
        hasher.update(asset.as_bytes());
    }
    hex::encode(hasher.finalize())
}

fn normalize_asset(asset: &str) -> String {
    asset.trim().replace('\\', "/").trim_start_matches('/').to_string()
}

/// Markup for each URL, one tag per line.
fn render_tags<F>(urls: impl IntoIterator<Item = String>, tag: F) -> String
where
    F: Fn(&str) -> String,
{
    urls.into_iter().map(|url| tag(&url)).collect::<Vec<_>>().join(crate::constants::MARKUP_SEPARATOR)
}

/// URLs a module renders: the bundle URL when output is optimized, one per asset otherwise.
fn module_urls(module: &dyn AssetModule, application: &AssetApplication) -> Vec<String> {
    let generator = application.url_generator();
    if application.is_output_optimized() {
        vec![generator.module_url(module)]
    } else {
        module.assets().iter().map(|asset| generator.asset_url(module, asset)).collect()
    }
}
