use super::script::script_tag;
use super::stylesheet::link_tag;
use super::{AssetModule, ModuleKind};
use crate::application::AssetApplication;
use crate::core::Location;

/// A script loaded from an absolute URL outside the application.
///
/// External modules have no assets, no references, and no preferred location. They
/// always render their URL as-is, in both optimized and debug output.
#[derive(Debug, Clone)]
pub struct ExternalScriptModule {
    url: String,
    location: Location,
}

impl ExternalScriptModule {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            location: Location::Default,
        }
    }
}

impl AssetModule for ExternalScriptModule {
    fn path(&self) -> &str {
        &self.url
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Script
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn hash(&self) -> String {
        String::new()
    }

    fn is_external(&self) -> bool {
        true
    }

    fn render(&self, _application: &AssetApplication) -> String {
        script_tag(&self.url)
    }
}

/// A stylesheet loaded from an absolute URL outside the application.
#[derive(Debug, Clone)]
pub struct ExternalStylesheetModule {
    url: String,
    location: Location,
}

impl ExternalStylesheetModule {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            location: Location::Default,
        }
    }
}

impl AssetModule for ExternalStylesheetModule {
    fn path(&self) -> &str {
        &self.url
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Stylesheet
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn hash(&self) -> String {
        String::new()
    }

    fn is_external(&self) -> bool {
        true
    }

    fn render(&self, _application: &AssetApplication) -> String {
        link_tag(&self.url, None)
    }
}
