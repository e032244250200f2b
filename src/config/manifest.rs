//! Bundle manifest parsing and validation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::rc::Rc;
use tokio::fs;

use crate::application::AssetApplication;
use crate::constants::DEFAULT_URL_PREFIX;
use crate::container::ModuleContainer;
use crate::core::AssetError;
use crate::module::{ModuleInfo, ModuleKind, ModuleRef, ScriptModule, StylesheetModule};
use crate::utils::path::is_absolute_url;

/// Rendering settings from the `[settings]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Prefix for generated module and asset URLs.
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,

    /// Render one tag per module (`true`) or one per asset (`false`).
    #[serde(default = "default_optimize")]
    pub optimize: bool,
}

fn default_url_prefix() -> String {
    DEFAULT_URL_PREFIX.to_string()
}

const fn default_optimize() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            optimize: default_optimize(),
        }
    }
}

/// One `[[modules]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSpec {
    /// Module path; normalized to app-relative form.
    pub path: String,

    pub kind: ModuleKind,

    /// Preferred location when a reference gives none.
    #[serde(default)]
    pub location: Option<String>,

    /// Asset paths relative to the module.
    #[serde(default)]
    pub assets: Vec<String>,

    /// Paths of modules this one depends on.
    #[serde(default)]
    pub references: Vec<String>,

    /// `media` attribute; stylesheets only.
    #[serde(default)]
    pub media: Option<String>,
}

impl ModuleSpec {
    fn validate(&self, index: usize) -> Result<(), AssetError> {
        if self.path.trim().is_empty() {
            return Err(AssetError::InvalidManifest {
                reason: format!("module #{} has an empty path", index + 1),
            });
        }

        if self.media.is_some() && self.kind != ModuleKind::Stylesheet {
            return Err(AssetError::InvalidManifest {
                reason: format!(
                    "module \"{}\" sets media, which only applies to stylesheets",
                    self.path
                ),
            });
        }

        // References resolve against container modules, whose paths are app-relative.
        if let Some(reference) = self.references.iter().find(|r| is_absolute_url(r)) {
            return Err(AssetError::InvalidManifest {
                reason: format!(
                    "module \"{}\" references the URL {reference}; reference URLs from pages instead",
                    self.path
                ),
            });
        }

        if let Some(asset) = self.assets.iter().find(|a| a.trim().is_empty()) {
            return Err(AssetError::InvalidManifest {
                reason: format!("module \"{}\" lists an empty asset path {asset:?}", self.path),
            });
        }

        Ok(())
    }

    /// Build the module this entry describes.
    pub fn to_module(&self) -> ModuleRef {
        let info = ModuleInfo::new(&self.path)
            .with_location(self.location.as_deref())
            .with_assets(&self.assets)
            .with_references(&self.references);

        match self.kind {
            ModuleKind::Script => Rc::new(ScriptModule::new(info)),
            ModuleKind::Stylesheet => {
                let module = StylesheetModule::new(info);
                match &self.media {
                    Some(media) => Rc::new(module.with_media(media.clone())),
                    None => Rc::new(module),
                }
            }
        }
    }
}

/// The parsed `assetref.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleManifest {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub modules: Vec<ModuleSpec>,
}

impl BundleManifest {
    /// Load and validate a manifest file.
    ///
    /// # Errors
    ///
    /// - [`AssetError::ManifestNotFound`] if the file does not exist
    /// - [`AssetError::TomlError`] for syntax or schema errors
    /// - [`AssetError::InvalidManifest`] for inconsistent entries
    pub async fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssetError::ManifestNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to read bundle manifest {}", path.display())));
            }
        };

        let manifest = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load bundle manifest {}", path.display()))?;
        tracing::debug!("Loaded {} module(s) from {}", manifest.modules.len(), path.display());
        Ok(manifest)
    }

    /// Parse and validate manifest text.
    pub fn from_toml_str(content: &str) -> Result<Self, AssetError> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check every module entry.
    pub fn validate(&self) -> Result<(), AssetError> {
        for (index, module) in self.modules.iter().enumerate() {
            module.validate(index)?;
        }
        Ok(())
    }

    /// Build a container with every declared module.
    ///
    /// # Errors
    ///
    /// [`AssetError::DuplicateModule`] if two entries normalize to the same path.
    pub fn build_container(&self) -> Result<ModuleContainer> {
        ModuleContainer::new(self.modules.iter().map(ModuleSpec::to_module).collect())
    }

    pub fn build_application(&self) -> AssetApplication {
        AssetApplication::from_settings(&self.settings)
    }
}
