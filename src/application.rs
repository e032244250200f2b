//! The render context handed to modules.

use crate::config::Settings;
use crate::url_generator::{PrefixUrlGenerator, UrlGenerator};

/// Application-wide rendering settings: how URLs are built and whether output is
/// bundled.
///
/// With optimized output each module renders one tag pointing at its bundle URL.
/// Without it, each module renders one tag per asset so files can be debugged
/// individually.
#[derive(Debug)]
pub struct AssetApplication {
    url_generator: Box<dyn UrlGenerator>,
    output_optimized: bool,
}

impl AssetApplication {
    pub fn new(url_generator: Box<dyn UrlGenerator>, output_optimized: bool) -> Self {
        Self {
            url_generator,
            output_optimized,
        }
    }

    /// Build from manifest settings, using a [`PrefixUrlGenerator`].
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Box::new(PrefixUrlGenerator::new(&settings.url_prefix)), settings.optimize)
    }

    pub fn url_generator(&self) -> &dyn UrlGenerator {
        self.url_generator.as_ref()
    }

    pub fn is_output_optimized(&self) -> bool {
        self.output_optimized
    }
}

impl Default for AssetApplication {
    fn default() -> Self {
        Self::new(Box::new(PrefixUrlGenerator::default()), true)
    }
}
