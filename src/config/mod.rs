//! Configuration for assetref
//!
//! All configuration lives in the bundle manifest (`assetref.toml`), which declares
//! the application's modules and rendering settings:
//!
//! ```toml
//! [settings]
//! url_prefix = "/_assets"   # prefix for generated URLs
//! optimize = true           # false renders one tag per asset
//!
//! [[modules]]
//! path = "~/scripts/app"
//! kind = "script"           # "script" | "stylesheet"
//! location = "body"         # preferred page location (optional)
//! assets = ["main.js", "util.js"]
//! references = ["~/scripts/lib"]
//!
//! [[modules]]
//! path = "~/styles/site"
//! kind = "stylesheet"
//! media = "screen"          # stylesheets only
//! ```
//!
//! CLI flags (`--url-prefix`, `--debug-assets`) override `[settings]`.

pub mod manifest;

pub use manifest::{BundleManifest, ModuleSpec, Settings};
