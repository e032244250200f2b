//! URL generation for modules and their assets.

use crate::constants::DEFAULT_URL_PREFIX;
use crate::module::{AssetModule, asset_path};
use crate::utils::path::strip_app_prefix;

/// Builds the URLs rendered into markup.
pub trait UrlGenerator: std::fmt::Debug {
    /// URL of the whole (bundled) module.
    fn module_url(&self, module: &dyn AssetModule) -> String;

    /// URL of one asset of a module, used for unbundled debug output.
    fn asset_url(&self, module: &dyn AssetModule, asset: &str) -> String;
}

/// Generates URLs under a fixed prefix, versioned by the module hash.
///
/// - module: `{prefix}/{scripts|styles}/{path}_{hash}`
/// - asset: `{prefix}/asset/{path}/{asset}?{hash}`
///
/// External modules keep their own URL.
#[derive(Debug, Clone)]
pub struct PrefixUrlGenerator {
    prefix: String,
}

impl PrefixUrlGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixUrlGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_URL_PREFIX)
    }
}

impl UrlGenerator for PrefixUrlGenerator {
    fn module_url(&self, module: &dyn AssetModule) -> String {
        if module.is_external() {
            return module.path().to_string();
        }
        format!(
            "{}/{}/{}_{}",
            self.prefix,
            module.kind().url_segment(),
            strip_app_prefix(module.path()),
            module.hash()
        )
    }

    fn asset_url(&self, module: &dyn AssetModule, asset: &str) -> String {
        if module.is_external() {
            return module.path().to_string();
        }
        format!(
            "{}/asset/{}?{}",
            self.prefix,
            strip_app_prefix(&asset_path(module.path(), asset)),
            module.hash()
        )
    }
}
