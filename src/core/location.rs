//! Named insertion points in a page.

use std::fmt;

/// Where in a page a set of asset references is rendered.
///
/// An absent location and an empty location name are the same place: both normalize
/// to [`Location::Default`]. `Location::Named` never holds an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Location {
    /// The unnamed location used when none is given
    #[default]
    Default,
    /// A named location such as `head` or `body`
    Named(String),
}

impl Location {
    /// Build a location from a name, treating `""` as the default location.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Self::Default
        } else {
            Self::Named(name)
        }
    }

    /// Build a location from an optional name.
    pub fn from_option(name: Option<&str>) -> Self {
        name.map_or(Self::Default, Self::named)
    }

    /// The location name, or `None` for the default location.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Whether this is the default location.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<Option<&str>> for Location {
    fn from(name: Option<&str>) -> Self {
        Self::from_option(name)
    }
}

impl From<&Location> for Location {
    fn from(location: &Location) -> Self {
        location.clone()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "(default)"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}
