//! Test utilities for assetref
//!
//! Shared fixtures for unit tests (in-crate) and the `tests/` suites (through the
//! `test-utils` feature):
//!
//! - [`init_test_logging`] - one-time tracing setup honouring `RUST_LOG`
//! - [`sample_container`] - a small container of script and stylesheet modules
//! - [`collector_with`] - a collector wired to a fresh placeholder tracker
//! - [`SAMPLE_MANIFEST`] - the same modules as a TOML bundle manifest

use std::rc::Rc;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::application::AssetApplication;
use crate::collector::ReferenceCollector;
use crate::container::ModuleContainer;
use crate::factory::ExternalModuleFactory;
use crate::module::{ModuleInfo, ModuleRef, ScriptModule, StylesheetModule};
use crate::placeholder::PlaceholderTracker;
use crate::url_generator::PrefixUrlGenerator;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise `RUST_LOG`;
/// with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// The modules in [`SAMPLE_MANIFEST`], built in code.
///
/// - `~/scripts/lib` (body) - `jquery.js`
/// - `~/scripts/app` (body) - `app.js`, `ui.js`; references `~/scripts/lib`
/// - `~/styles/site` (head) - `site.css`
/// - `~/styles/print` (no location, media `print`) - `print.css`
pub fn sample_modules() -> Vec<ModuleRef> {
    vec![
        Rc::new(ScriptModule::new(
            ModuleInfo::new("~/scripts/lib").with_location("body").with_assets(["jquery.js"]),
        )),
        Rc::new(ScriptModule::new(
            ModuleInfo::new("~/scripts/app")
                .with_location("body")
                .with_assets(["app.js", "ui.js"])
                .with_references(["~/scripts/lib"]),
        )),
        Rc::new(StylesheetModule::new(
            ModuleInfo::new("~/styles/site").with_location("head").with_assets(["site.css"]),
        )),
        Rc::new(
            StylesheetModule::new(ModuleInfo::new("~/styles/print").with_assets(["print.css"]))
                .with_media("print"),
        ),
    ]
}

/// A container holding [`sample_modules`].
pub fn sample_container() -> ModuleContainer {
    ModuleContainer::new(sample_modules()).unwrap_or_else(|e| panic!("sample container: {e}"))
}

/// An application with the default URL prefix.
pub fn application(optimized: bool) -> AssetApplication {
    AssetApplication::new(Box::new(PrefixUrlGenerator::default()), optimized)
}

/// A collector over `container` with optimized output, plus its tracker.
pub fn collector_with(container: ModuleContainer) -> (ReferenceCollector, Rc<PlaceholderTracker>) {
    let tracker = Rc::new(PlaceholderTracker::new());
    let collector = ReferenceCollector::new(
        Rc::new(container),
        Rc::new(ExternalModuleFactory::new()),
        Rc::clone(&tracker),
        Rc::new(application(true)),
    );
    (collector, tracker)
}

/// TOML bundle manifest describing the same modules as [`sample_modules`].
pub const SAMPLE_MANIFEST: &str = r#"
[settings]
url_prefix = "/_assets"
optimize = true

[[modules]]
path = "~/scripts/lib"
kind = "script"
location = "body"
assets = ["jquery.js"]

[[modules]]
path = "~/scripts/app"
kind = "script"
location = "body"
assets = ["app.js", "ui.js"]
references = ["~/scripts/lib"]

[[modules]]
path = "~/styles/site"
kind = "stylesheet"
location = "head"
assets = ["site.css"]

[[modules]]
path = "~/styles/print"
kind = "stylesheet"
media = "print"
assets = ["print.css"]
"#;
