//! Type tags for runtime type matching.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a routable type.
///
/// Each routable type registers its tag once; matching a declared route
/// parameter against a candidate value is plain tag equality.
///
/// A tag may carry a namespace (`app::models::BlogPost`,
/// `App\Models\BlogPost`, `models.BlogPost`). The namespace takes part in
/// equality but not in [`TypeTag::simple_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    /// Create a tag from a static type name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a tag from a runtime type name (e.g. loaded from config).
    #[inline]
    pub fn owned(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Tag of a Rust type, derived from [`std::any::type_name`].
    ///
    /// Two tags created with `of::<T>()` for the same `T` are equal, and
    /// `TypeTag::of::<User>().simple_name()` is `"User"`.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Type name with any namespace or module prefix stripped.
    ///
    /// - `app::models::BlogPost` -> `BlogPost`
    /// - `App\Models\BlogPost` -> `BlogPost`
    /// - `Wrapper<app::Inner>` -> `Wrapper`
    pub fn simple_name(&self) -> &str {
        // Generic arguments would otherwise leak their own paths
        let base = self.0.split('<').next().unwrap_or(self.as_str());
        base.rsplit(['\\', '.', ':'])
            .find(|part| !part.is_empty())
            .unwrap_or(base)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeTag {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        Self::owned(name)
    }
}

impl PartialEq<str> for TypeTag {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for TypeTag {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BlogPost;

    #[test]
    fn test_simple_name_strips_namespaces() {
        assert_eq!(TypeTag::new("BlogPost").simple_name(), "BlogPost");
        assert_eq!(TypeTag::new("app::models::BlogPost").simple_name(), "BlogPost");
        assert_eq!(TypeTag::new("App\\Models\\BlogPost").simple_name(), "BlogPost");
        assert_eq!(TypeTag::new("models.BlogPost").simple_name(), "BlogPost");
    }

    #[test]
    fn test_simple_name_ignores_generics() {
        assert_eq!(
            TypeTag::new("app::Wrapper<app::Inner>").simple_name(),
            "Wrapper"
        );
    }

    #[test]
    fn test_of_rust_type() {
        let tag = TypeTag::of::<BlogPost>();
        assert_eq!(tag.simple_name(), "BlogPost");
        assert_eq!(tag, TypeTag::of::<BlogPost>());
        assert_ne!(tag, TypeTag::new("BlogPost"));
    }

    #[test]
    fn test_static_and_owned_are_equal() {
        assert_eq!(TypeTag::new("User"), TypeTag::owned("User".to_string()));
        assert_eq!(TypeTag::new("User"), "User");
    }
}
