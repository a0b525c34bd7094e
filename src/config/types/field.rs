//! Config field paths.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path to a config field, e.g. `routes[2].params.user`.
///
/// # Example
///
/// ```ignore
/// let field = FieldPath::new("routes").index(2).field("path");
/// diag.error(field, "placeholder `{user` is not closed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Child field: `routes[0]` -> `routes[0].path`.
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    /// Array element: `routes` -> `routes[0]`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
