use super::{AssetModule, ModuleInfo, ModuleKind, module_urls, render_tags};
use crate::application::AssetApplication;
use crate::core::Location;
use crate::utils::html::escape_attribute;

/// A CSS bundle declared in the manifest, with an optional `media` query.
#[derive(Debug, Clone)]
pub struct StylesheetModule {
    info: ModuleInfo,
    media: Option<String>,
}

impl StylesheetModule {
    pub fn new(info: ModuleInfo) -> Self {
        Self {
            info,
            media: None,
        }
    }

    /// Set the `media` attribute. An empty string clears it.
    #[must_use]
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        let media = media.into();
        self.media = if media.trim().is_empty() {
            None
        } else {
            Some(media)
        };
        self
    }

    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }
}

impl AssetModule for StylesheetModule {
    fn path(&self) -> &str {
        self.info.path()
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Stylesheet
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
        let media = self.media.as_deref();
        render_tags(module_urls(self, application), |url| link_tag(url, media))
    }
}

pub(super) fn link_tag(url: &str, media: Option<&str>) -> String {
    match media {
        Some(media) => format!(
            r#"<link href="{}" type="text/css" rel="stylesheet" media="{}"/>"#,
            escape_attribute(url),
            escape_attribute(media)
        ),
        None => {
            format!(r#"<link href="{}" type="text/css" rel="stylesheet"/>"#, escape_attribute(url))
        }
    }
}
