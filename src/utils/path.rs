//! Path and URL helpers for asset references.
//!
//! Module and asset paths are kept in *app-relative* form: `~/` followed by a
//! forward-slash separated path. References written by page authors may use a
//! leading `/`, no prefix at all, or backslashes; [`app_relative`] folds all of
//! those into the canonical form before lookup.

use url::Url;

/// Prefix marking an application-relative path.
pub const APP_RELATIVE_PREFIX: &str = "~/";

/// Normalize a path to app-relative form.
///
/// - backslashes become forward slashes
/// - `~/x` is kept, `/x` becomes `~/x`, `x` becomes `~/x`
/// - trailing slashes are removed (except for the bare root `~/`)
///
/// # Examples
///
/// ```rust
/// use assetref::utils::path::app_relative;
///
/// assert_eq!(app_relative("scripts/app.js"), "~/scripts/app.js");
/// assert_eq!(app_relative("/scripts/app.js"), "~/scripts/app.js");
/// assert_eq!(app_relative("~/scripts/"), "~/scripts");
/// assert_eq!(app_relative("scripts\\lib"), "~/scripts/lib");
/// ```
pub fn app_relative(path: &str) -> String {
    let path = path.trim().replace('\\', "/");

    let mut normalized = if path.starts_with(APP_RELATIVE_PREFIX) {
        path
    } else if let Some(rest) = path.strip_prefix('~') {
        format!("~/{}", rest.trim_start_matches('/'))
    } else {
        format!("~/{}", path.trim_start_matches('/'))
    };

    while normalized.len() > APP_RELATIVE_PREFIX.len() && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Strip the `~/` prefix, for building URLs.
pub fn strip_app_prefix(path: &str) -> &str {
    path.strip_prefix(APP_RELATIVE_PREFIX).unwrap_or(path)
}

/// Whether `candidate` is a well-formed absolute `http` or `https` URL with a host.
///
/// Only these schemes name assets a browser can load directly, so anything else
/// (`file:`, `data:`, relative paths) is treated as a module path.
pub fn is_absolute_url(candidate: &str) -> bool {
    match Url::parse(candidate.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// Case-insensitive path equality, as used for module lookup.
pub fn paths_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
