use super::{AssetModule, ModuleInfo, ModuleKind, module_urls, render_tags};
use crate::application::AssetApplication;
use crate::core::Location;
use crate::utils::html::escape_attribute;

/// A JavaScript bundle declared in the manifest.
#[derive(Debug, Clone)]
pub struct ScriptModule {
    info: ModuleInfo,
}

impl ScriptModule {
    pub fn new(info: ModuleInfo) -> Self {
        Self {
            info,
        }
    }
}

impl AssetModule for ScriptModule {
    fn path(&self) -> &str {
        self.info.path()
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Script
    }

    fn location(&self) -> &Location {
        self.info.location()
    }

    fn references(&self) -> &[String] {
        self.info.references()
    }

    fn assets(&self) -> &[String] {
        self.info.assets()
    }

    fn render(&self, application: &AssetApplication) -> String {
        render_tags(module_urls(self, application), script_tag)
    }
}

pub(super) fn script_tag(url: &str) -> String {
    format!(r#"<script src="{}" type="text/javascript"></script>"#, escape_attribute(url))
}
