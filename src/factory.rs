//! Creation of ad-hoc modules for absolute URLs.

use std::rc::Rc;

use crate::module::{ExternalScriptModule, ExternalStylesheetModule, ModuleKind, ModuleRef};

/// Creates modules for references that no container module owns.
pub trait ModuleFactory {
    /// Create an external module for an absolute URL.
    fn create_external_module(&self, url: &str) -> ModuleRef;
}

/// Creates external script or stylesheet modules.
///
/// Unpinned, the kind is chosen from the URL: a path ending in `.css` (ignoring case
/// and any query string or fragment) yields a stylesheet, anything else a script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalModuleFactory {
    kind: Option<ModuleKind>,
}

impl ExternalModuleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory that always creates modules of `kind`.
    pub fn pinned(kind: ModuleKind) -> Self {
        Self {
            kind: Some(kind),
        }
    }

    fn kind_for(&self, url: &str) -> ModuleKind {
        if let Some(kind) = self.kind {
            return kind;
        }
        let path = match url::Url::parse(url) {
            Ok(parsed) => parsed.path().to_ascii_lowercase(),
            Err(_) => url.to_ascii_lowercase(),
        };
        if path.ends_with(".css") {
            ModuleKind::Stylesheet
        } else {
            ModuleKind::Script
        }
    }
}

impl ModuleFactory for ExternalModuleFactory {
    fn create_external_module(&self, url: &str) -> ModuleRef {
        let kind = self.kind_for(url);
        tracing::debug!("Creating external {} module for {}", kind, url);
        match kind {
            ModuleKind::Script => Rc::new(ExternalScriptModule::new(url)),
            ModuleKind::Stylesheet => Rc::new(ExternalStylesheetModule::new(url)),
        }
    }
}
