//! Constants shared across the crate.

/// File name looked up when `--manifest` is not given.
pub const MANIFEST_FILE_NAME: &str = "assetref.toml";

/// URL prefix for generated module and asset URLs.
pub const DEFAULT_URL_PREFIX: &str = "/_assets";

/// Marker that opens every placeholder token.
pub const PLACEHOLDER_PREFIX: &str = "__ASSETREF_PLACEHOLDER_";

/// Marker that closes every placeholder token.
pub const PLACEHOLDER_SUFFIX: &str = "__";

/// Separator between rendered module tags within one location.
pub const MARKUP_SEPARATOR: &str = "\n";
