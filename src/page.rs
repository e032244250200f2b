//! One page render: template directives in, finalized HTML out.
//!
//! A [`Page`] owns the per-pass state: a [`PlaceholderTracker`] for the document and a
//! [`ReferenceCollector`] writing into it. Templates are processed line by line. Lines
//! whose trimmed text starts with `@` are directives:
//!
//! | Directive | Effect |
//! |-----------|--------|
//! | `@reference <path> [location]` | add a reference; writes nothing |
//! | `@render [location]` | writes the placeholder for the location |
//! | `@url <path>` | writes the module URL |
//!
//! Every other line is copied through, including lines starting with other `@` words
//! such as CSS at-rules (`@media`, `@import`). Because `@render` writes a placeholder, a
//! `@reference` further down the template still lands in an earlier `@render`.
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use assetref::application::AssetApplication;
//! use assetref::container::ModuleContainer;
//! use assetref::page::Page;
//!
//! # fn example(container: ModuleContainer) -> anyhow::Result<()> {
//! let mut page = Page::new(Rc::new(container), Rc::new(AssetApplication::default()));
//! page.process_template("<head>\n@render head\n</head>\n@reference ~/styles/site head\n")?;
//! let html = page.finish()?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::rc::Rc;

use crate::application::AssetApplication;
use crate::collector::ReferenceCollector;
use crate::container::ModuleContainer;
use crate::core::AssetError;
use crate::factory::{ExternalModuleFactory, ModuleFactory};
use crate::placeholder::PlaceholderTracker;

const DIRECTIVE_NAMES: [&str; 3] = ["reference", "render", "url"];

/// A parsed template directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `@reference <path> [location]`
    Reference {
        path: String,
        location: Option<String>,
    },
    /// `@render [location]`
    Render {
        location: Option<String>,
    },
    /// `@url <path>`
    Url {
        path: String,
    },
}

impl Directive {
    /// Parse a template line. Returns `Ok(None)` for lines that are not directives.
    ///
    /// Only `@reference`, `@render` and `@url` are directives; any other `@` line is
    /// page content. `line_number` is 1-based and only used for error reporting.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidDirective`] if a directive has the wrong number of arguments.
    pub fn parse(line: &str, line_number: usize) -> Result<Option<Self>, AssetError> {
        let trimmed = line.trim();
        let Some(body) = trimmed.strip_prefix('@') else {
            return Ok(None);
        };

        let mut parts = body.split_whitespace();
        let Some(name) = parts.next().filter(|name| DIRECTIVE_NAMES.contains(name)) else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let invalid = || AssetError::InvalidDirective {
            line: line_number,
            directive: trimmed.to_string(),
        };

        let directive = match (name, args.as_slice()) {
            ("reference", [path]) => Self::Reference {
                path: (*path).to_string(),
                location: None,
            },
            ("reference", [path, location]) => Self::Reference {
                path: (*path).to_string(),
                location: Some((*location).to_string()),
            },
            ("render", []) => Self::Render {
                location: None,
            },
            ("render", [location]) => Self::Render {
                location: Some((*location).to_string()),
            },
            ("url", [path]) => Self::Url {
                path: (*path).to_string(),
            },
            _ => return Err(invalid()),
        };

        Ok(Some(directive))
    }
}

/// Per-pass state for rendering one page.
pub struct Page {
    collector: ReferenceCollector,
    placeholder_tracker: Rc<PlaceholderTracker>,
    output: String,
}

impl Page {
    /// Create a page whose unknown absolute URLs become external modules.
    pub fn new(container: Rc<ModuleContainer>, application: Rc<AssetApplication>) -> Self {
        Self::with_factory(container, Rc::new(ExternalModuleFactory::new()), application)
    }

    pub fn with_factory(
        container: Rc<ModuleContainer>,
        module_factory: Rc<dyn ModuleFactory>,
        application: Rc<AssetApplication>,
    ) -> Self {
        let placeholder_tracker = Rc::new(PlaceholderTracker::new());
        let collector = ReferenceCollector::new(
            container,
            module_factory,
            Rc::clone(&placeholder_tracker),
            application,
        );

        Self {
            collector,
            placeholder_tracker,
            output: String::new(),
        }
    }

    /// The collector for this page, for callers adding references directly.
    pub fn collector(&self) -> &ReferenceCollector {
        &self.collector
    }

    /// Process a template, appending its output.
    ///
    /// Line endings are normalized to `\n`; the last line keeps a trailing newline
    /// only if the template had one.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidDirective`] for malformed directives, and any error from
    /// the collector, with the line number attached as context.
    pub fn process_template(&mut self, template: &str) -> Result<()> {
        let lines: Vec<&str> = template.lines().collect();
        let ends_with_newline = template.ends_with('\n');

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let is_last = index + 1 == lines.len();

            let emitted = match Directive::parse(line, line_number)? {
                Some(directive) => self
                    .apply(directive)
                    .with_context(|| format!("Failed to apply directive on line {line_number}"))?,
                None => Some((*line).to_string()),
            };

            if let Some(text) = emitted {
                self.output.push_str(&text);
                if !is_last || ends_with_newline {
                    self.output.push('\n');
                }
            }
        }

        Ok(())
    }

    fn apply(&mut self, directive: Directive) -> Result<Option<String>> {
        tracing::debug!("Applying directive {:?}", directive);
        match directive {
            Directive::Reference {
                path,
                location,
            } => {
                self.collector.add_reference_path(&path, location.as_deref())?;
                Ok(None)
            }
            Directive::Render {
                location,
            } => Ok(Some(self.collector.render(location.as_deref()))),
            Directive::Url {
                path,
            } => Ok(Some(self.collector.resolve_url(&path)?)),
        }
    }

    /// Finalize the page: replace every placeholder with its markup.
    pub fn finish(self) -> Result<String> {
        let referenced = self.collector.referenced_locations();
        let rendered = self.collector.rendered_locations();
        for location in referenced.difference(&rendered) {
            tracing::warn!("Location {} has references but is never rendered", location);
        }

        self.placeholder_tracker.replace_placeholders(&self.output)
    }
}
