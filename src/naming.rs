//! Route names derived from routable types.
//!
//! ```text
//! User            -> users       -> users.show / users.edit
//! app::BlogPost   -> blog_posts  -> blog_posts.show
//! User + override -> profiles    -> profiles.show
//! ```

use crate::core::TypeTag;
use crate::model::Routable;
use crate::utils::{pluralize_last_word, snake_case};

/// Action used when none (or an empty one) is given.
pub const DEFAULT_ACTION: &str = "show";

/// Default route group of a type: snake_case simple name, last word
/// pluralized.
pub fn default_base_route(tag: &TypeTag) -> String {
    pluralize_last_word(&snake_case(tag.simple_name()))
}

/// Route group of `subject`.
///
/// Returns the declared override if any, otherwise the default derived from
/// the type tag. When the subject exposes a [`BaseRoute`](crate::model::BaseRoute)
/// slot, the result is memoized there.
pub fn base_route_name(subject: &dyn Routable) -> String {
    match subject.base_route() {
        Some(slot) => slot
            .get_or_init(|| default_base_route(&subject.type_tag()))
            .to_string(),
        None => default_base_route(&subject.type_tag()),
    }
}

/// Full route name: `"{base}.{action}"`.
pub fn route_name(subject: &dyn Routable, action: Option<&str>) -> String {
    join_route_name(&base_route_name(subject), action)
}

/// `"{base}.{action}"` for an already known route group.
pub fn join_route_name(base: &str, action: Option<&str>) -> String {
    format!("{}.{}", base, action_or_default(action))
}

#[inline]
pub(crate) fn action_or_default(action: Option<&str>) -> &str {
    match action {
        Some(action) if !action.is_empty() => action,
        _ => DEFAULT_ACTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RouteKey;
    use crate::model::BaseRoute;

    #[derive(Debug)]
    struct Model {
        tag: TypeTag,
        base_route: Option<BaseRoute>,
    }

    impl Model {
        fn new(tag: &'static str) -> Self {
            Self {
                tag: TypeTag::new(tag),
                base_route: Some(BaseRoute::new()),
            }
        }

        fn with_override(tag: &'static str, base: &str) -> Self {
            Self {
                tag: TypeTag::new(tag),
                base_route: Some(BaseRoute::fixed(base)),
            }
        }
    }

    impl Routable for Model {
        fn type_tag(&self) -> TypeTag {
            self.tag.clone()
        }

        fn route_key(&self) -> RouteKey {
            RouteKey::Int(1)
        }

        fn base_route(&self) -> Option<&BaseRoute> {
            self.base_route.as_ref()
        }
    }

    #[test]
    fn test_default_base_route() {
        assert_eq!(base_route_name(&Model::new("User")), "users");
        assert_eq!(base_route_name(&Model::new("BlogPost")), "blog_posts");
        assert_eq!(base_route_name(&Model::new("Category")), "categories");
        assert_eq!(base_route_name(&Model::new("Person")), "people");
    }

    #[test]
    fn test_base_route_ignores_namespace() {
        assert_eq!(base_route_name(&Model::new("app::models::BlogPost")), "blog_posts");
        assert_eq!(base_route_name(&Model::new("App\\Models\\BlogPost")), "blog_posts");
    }

    #[test]
    fn test_override_is_verbatim() {
        let user = Model::with_override("User", "profiles");
        assert_eq!(base_route_name(&user), "profiles");

        let odd = Model::with_override("User", "Admin.People");
        assert_eq!(base_route_name(&odd), "Admin.People");
    }

    #[test]
    fn test_memoized_and_idempotent() {
        let user = Model::new("User");
        assert_eq!(base_route_name(&user), base_route_name(&user));
        assert_eq!(user.base_route.as_ref().unwrap().get(), Some("users"));
    }

    #[test]
    fn test_without_slot() {
        let user = Model {
            tag: TypeTag::new("User"),
            base_route: None,
        };
        assert_eq!(base_route_name(&user), "users");
        assert_eq!(route_name(&user, None), "users.show");
    }

    #[test]
    fn test_route_name() {
        let user = Model::new("User");
        assert_eq!(route_name(&user, None), "users.show");
        assert_eq!(route_name(&user, Some("")), "users.show");
        assert_eq!(route_name(&user, Some("show")), "users.show");
        assert_eq!(route_name(&user, Some("edit")), "users.edit");

        let profile = Model::with_override("User", "profiles");
        assert_eq!(route_name(&profile, None), "profiles.show");
        assert_eq!(route_name(&profile, Some("edit")), "profiles.edit");
    }
}
