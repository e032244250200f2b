//! Per-pass collection of asset references by page location.
//!
//! A [`ReferenceCollector`] lives for one processing pass (one page render). Callers
//! add references to modules under named [`Location`]s and ask for a location to be
//! rendered. Rendering does not produce markup immediately: it returns a placeholder
//! token from the shared [`PlaceholderTracker`], and the markup is built when the
//! tracker finalizes the document. References added to a location after it was
//! rendered, but before finalization, are therefore still included.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use assetref::application::AssetApplication;
//! use assetref::collector::ReferenceCollector;
//! use assetref::container::ModuleContainer;
//! use assetref::factory::ExternalModuleFactory;
//! use assetref::placeholder::PlaceholderTracker;
//!
//! # fn example(container: ModuleContainer) -> anyhow::Result<()> {
//! let tracker = Rc::new(PlaceholderTracker::new());
//! let collector = ReferenceCollector::new(
//!     Rc::new(container),
//!     Rc::new(ExternalModuleFactory::new()),
//!     tracker.clone(),
//!     Rc::new(AssetApplication::default()),
//! );
//!
//! let token = collector.render(Some("body"));
//! collector.add_reference_path("~/scripts/app", Some("body"))?;
//!
//! let html = tracker.replace_placeholders(&format!("<body>{token}</body>"))?;
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::application::AssetApplication;
use crate::constants::MARKUP_SEPARATOR;
use crate::container::ModuleContainer;
use crate::core::{AssetError, Location};
use crate::factory::ModuleFactory;
use crate::module::{ModuleRef, same_module};
use crate::placeholder::PlaceholderTracker;
use crate::utils::path::{app_relative, is_absolute_url};

/// State shared between the collector and the producers it hands to the tracker.
struct Registrations {
    container: Rc<ModuleContainer>,
    application: Rc<AssetApplication>,
    modules_by_location: RefCell<HashMap<Location, Vec<ModuleRef>>>,
}

impl Registrations {
    /// The modules registered under `location`, creating an empty list if needed.
    fn registered(&self, location: &Location) -> Vec<ModuleRef> {
        self.modules_by_location.borrow_mut().entry(location.clone()).or_default().clone()
    }

    fn get_items(&self, location: &Location) -> Result<Vec<ModuleRef>> {
        let registered = self.registered(location);
        self.container.include_references_and_sort(&registered)
    }

    fn create_html(&self, location: &Location) -> Result<String> {
        let modules = self.get_items(location)?;
        tracing::debug!("Rendering {} module(s) for location {}", modules.len(), location);

        let markup: Vec<String> = modules
            .iter()
            .map(|module| module.render(&self.application))
            .filter(|html| !html.is_empty())
            .collect();
        Ok(markup.join(MARKUP_SEPARATOR))
    }
}

/// Collects module references per location for one pass and renders them lazily.
pub struct ReferenceCollector {
    registrations: Rc<Registrations>,
    module_factory: Rc<dyn ModuleFactory>,
    placeholder_tracker: Rc<PlaceholderTracker>,
    rendered_locations: RefCell<HashSet<Location>>,
}

impl ReferenceCollector {
    pub fn new(
        container: Rc<ModuleContainer>,
        module_factory: Rc<dyn ModuleFactory>,
        placeholder_tracker: Rc<PlaceholderTracker>,
        application: Rc<AssetApplication>,
    ) -> Self {
        Self {
            registrations: Rc::new(Registrations {
                container,
                application,
                modules_by_location: RefCell::new(HashMap::new()),
            }),
            module_factory,
            placeholder_tracker,
            rendered_locations: RefCell::new(HashSet::new()),
        }
    }

    /// Add a reference to the module owning `path`.
    ///
    /// `path` is normalized to app-relative form unless it is an absolute URL. If no
    /// module contains it and it is an absolute `http(s)` URL, an external module is
    /// created for it. Without an explicit `location`, the module's preferred location
    /// is used.
    ///
    /// # Errors
    ///
    /// [`AssetError::ModuleNotFound`] if no module contains the path and it is not an
    /// absolute URL.
    pub fn add_reference_path(&self, path: &str, location: Option<&str>) -> Result<()> {
        let path = if is_absolute_url(path) {
            path.trim().to_string()
        } else {
            app_relative(path)
        };

        let module = match self.registrations.container.find_module_containing_path(&path) {
            Some(module) => module,
            None if is_absolute_url(&path) => self.module_factory.create_external_module(&path),
            None => {
                return Err(AssetError::ModuleNotFound {
                    path,
                }
                .into());
            }
        };

        let location = match location {
            Some(name) => Location::named(name),
            None => module.location().clone(),
        };

        self.add_reference(module, location);
        Ok(())
    }

    /// Add a reference to `module` under `location`. Adding the same module to the
    /// same location again does nothing.
    pub fn add_reference(&self, module: ModuleRef, location: impl Into<Location>) {
        let location = location.into();
        let mut table = self.registrations.modules_by_location.borrow_mut();
        let modules = table.entry(location.clone()).or_default();

        if modules.iter().any(|existing| same_module(existing, &module)) {
            return;
        }

        tracing::debug!("Added reference to {} under location {}", module.path(), location);
        modules.push(module);
    }

    /// The modules for `location` with their dependencies, in load order.
    ///
    /// An unknown location yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates [`AssetError::UnresolvedReference`] and
    /// [`AssetError::CircularDependency`] from the container.
    pub fn get_items(&self, location: impl Into<Location>) -> Result<Vec<ModuleRef>> {
        self.registrations.get_items(&location.into())
    }

    /// Reserve the markup for `location` and return its placeholder token.
    ///
    /// The markup is built when the tracker replaces placeholders, from whatever is
    /// registered under `location` at that time.
    pub fn render(&self, location: impl Into<Location>) -> String {
        let location = location.into();
        self.rendered_locations.borrow_mut().insert(location.clone());

        let registrations = Rc::clone(&self.registrations);
        self.placeholder_tracker.insert_placeholder(move || registrations.create_html(&location))
    }

    /// URL of the module owning `path`.
    ///
    /// # Errors
    ///
    /// [`AssetError::ModuleNotFound`] if no module contains the path.
    pub fn resolve_url(&self, path: &str) -> Result<String> {
        let path = app_relative(path);
        let module = self
            .registrations
            .container
            .find_module_containing_path(&path)
            .ok_or(AssetError::ModuleNotFound {
                path,
            })?;

        Ok(self.registrations.application.url_generator().module_url(&*module))
    }

    /// Locations [`render`](Self::render) has been called for.
    ///
    /// Nothing in the collector acts on this; it is exposed for callers that want to
    /// check for locations that were referenced but never rendered.
    pub fn rendered_locations(&self) -> HashSet<Location> {
        self.rendered_locations.borrow().clone()
    }

    /// Locations with at least one registered module.
    pub fn referenced_locations(&self) -> HashSet<Location> {
        self.registrations
            .modules_by_location
            .borrow()
            .iter()
            .filter(|(_, modules)| !modules.is_empty())
            .map(|(location, _)| location.clone())
            .collect()
    }
}

impl std::fmt::Debug for ReferenceCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceCollector")
            .field("locations", &self.registrations.modules_by_location.borrow().len())
            .field("rendered_locations", &self.rendered_locations.borrow())
            .finish()
    }
}
