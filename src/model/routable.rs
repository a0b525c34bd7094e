//! The routable capability.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::core::{RouteKey, TypeTag};

/// Shared handle to any routable value.
pub type RoutableRef = Arc<dyn Routable>;

/// A domain object that can be embedded in a URL as a path segment.
///
/// Implementors provide their type tag and route key; relations and a
/// base route slot are optional.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug)]
/// struct User {
///     id: i64,
///     base_route: BaseRoute,
/// }
///
/// impl Routable for User {
///     fn type_tag(&self) -> TypeTag {
///         TypeTag::new("User")
///     }
///
///     fn route_key(&self) -> RouteKey {
///         RouteKey::Int(self.id)
///     }
///
///     fn base_route(&self) -> Option<&BaseRoute> {
///         Some(&self.base_route)
///     }
/// }
/// ```
pub trait Routable: fmt::Debug + Send + Sync {
    /// Tag used to match this value against declared parameter types.
    fn type_tag(&self) -> TypeTag;

    /// Value used as this object's path segment.
    fn route_key(&self) -> RouteKey;

    /// Name of the attribute behind [`Routable::route_key`].
    fn route_key_name(&self) -> &str {
        "id"
    }

    /// Related routable under `name`, if the relation exists and is set.
    fn relation(&self, _name: &str) -> Option<RoutableRef> {
        None
    }

    /// Slot holding the base route name: either a declared override or the
    /// memoized default. `None` disables memoization.
    fn base_route(&self) -> Option<&BaseRoute> {
        None
    }
}

impl<T: Routable + ?Sized> Routable for Arc<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }

    fn route_key(&self) -> RouteKey {
        (**self).route_key()
    }

    fn route_key_name(&self) -> &str {
        (**self).route_key_name()
    }

    fn relation(&self, name: &str) -> Option<RoutableRef> {
        (**self).relation(name)
    }

    fn base_route(&self) -> Option<&BaseRoute> {
        (**self).base_route()
    }
}

/// Per-instance base route name.
///
/// Write-once: a declared override is stored at construction, otherwise the
/// first lookup stores the derived default. Concurrent first lookups compute
/// the same string, so whichever wins is correct.
#[derive(Debug, Default)]
pub struct BaseRoute(OnceLock<String>);

impl BaseRoute {
    /// Empty slot; the default name is derived on first use.
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Slot holding an explicit override (e.g. `"profiles"` for `User`).
    pub fn fixed(name: impl Into<String>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(name.into());
        Self(cell)
    }

    /// Stored name, if any.
    #[inline]
    pub fn get(&self) -> Option<&str> {
        self.0.get().map(String::as_str)
    }

    /// Stored name, computing and storing it first if the slot is empty.
    pub fn get_or_init(&self, init: impl FnOnce() -> String) -> &str {
        self.0.get_or_init(init)
    }
}

impl Clone for BaseRoute {
    fn clone(&self) -> Self {
        match self.get() {
            Some(name) => Self::fixed(name),
            None => Self::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_route_fixed() {
        let slot = BaseRoute::fixed("profiles");
        assert_eq!(slot.get(), Some("profiles"));
        assert_eq!(slot.get_or_init(|| "users".into()), "profiles");
    }

    #[test]
    fn test_base_route_memoizes_first_value() {
        let slot = BaseRoute::new();
        assert_eq!(slot.get(), None);
        assert_eq!(slot.get_or_init(|| "users".into()), "users");
        assert_eq!(slot.get_or_init(|| "other".into()), "users");
    }

    #[test]
    fn test_base_route_clone_keeps_value() {
        let slot = BaseRoute::new();
        slot.get_or_init(|| "users".into());
        assert_eq!(slot.clone().get(), Some("users"));
        assert_eq!(BaseRoute::new().clone().get(), None);
    }
}
