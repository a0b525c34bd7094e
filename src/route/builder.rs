//! URL building from resolved parameters.

use url::Url;

use super::{RouteDescriptor, Segment};
use crate::core::UrlPath;
use crate::error::{Result, RouteError};
use crate::resolve::ResolvedParameters;

/// Turns a route and its resolved parameters into a URL string.
pub trait UrlBuilder {
    fn build(&self, route: &RouteDescriptor, params: &ResolvedParameters) -> Result<String>;
}

/// Fills path template placeholders with route keys.
///
/// ```text
/// users/{user}/edit + user=Clifford James
///   -> /users/Clifford%20James/edit                  (no base)
///   -> http://localhost/users/Clifford%20James/edit  (base = http://localhost)
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathUrlBuilder {
    base: Option<Url>,
}

impl PathUrlBuilder {
    /// Builder producing root-relative paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder producing absolute URLs under `base`.
    pub fn with_base(base: Url) -> Self {
        Self { base: Some(base) }
    }

    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        Url::parse(base).map(Self::with_base)
    }

    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Encoded path for `route`, without the base URL.
    pub fn path(&self, route: &RouteDescriptor, params: &ResolvedParameters) -> Result<UrlPath> {
        let mut segments = Vec::with_capacity(route.segments().len());
        for segment in route.segments() {
            match segment {
                Segment::Literal(text) => segments.push(text.clone()),
                Segment::Placeholder { name, optional } => match params.key(name) {
                    Some(key) => {
                        let key = key.to_string();
                        // Dropped or rewritten by path normalization
                        if matches!(key.as_str(), "" | "." | "..") {
                            return Err(RouteError::InvalidSegment {
                                route: route.name().to_string(),
                                param: name.clone(),
                                key,
                            });
                        }
                        segments.push(key);
                    }
                    None if *optional => {}
                    None => {
                        return Err(RouteError::MissingPlaceholder {
                            route: route.name().to_string(),
                            param: name.clone(),
                        });
                    }
                },
            }
        }
        Ok(UrlPath::from_segments(segments))
    }
}

impl UrlBuilder for PathUrlBuilder {
    fn build(&self, route: &RouteDescriptor, params: &ResolvedParameters) -> Result<String> {
        let path = self.path(route, params)?;
        match &self.base {
            Some(base) => path
                .join_onto(base)
                .map(String::from)
                .map_err(|source| RouteError::InvalidUrl {
                    route: route.name().to_string(),
                    source,
                }),
            None => Ok(path.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::{ModelSettings, NewRecord, RecordStore};
    use crate::resolve::{CallerParameters, resolve};

    fn user_store() -> Arc<RecordStore> {
        let store = RecordStore::new();
        store.define_model(
            "Member",
            ModelSettings {
                route_key: Some("name".into()),
                base_route: None,
            },
        );
        store
    }

    #[test]
    fn test_relative_path() {
        let store = user_store();
        let user = store.insert(NewRecord::new("User", 1));
        let route = RouteDescriptor::parse("users.edit", "users/{user}/edit", [("user", "User")])
            .unwrap();

        let params = resolve(&route, CallerParameters::none(), &user).unwrap();
        assert_eq!(PathUrlBuilder::new().build(&route, &params).unwrap(), "/users/1/edit");
    }

    #[test]
    fn test_absolute_url_with_route_key_override() {
        let store = user_store();
        let member = store.insert(NewRecord::new("Member", 3).attribute("name", "Clifford James"));
        let route =
            RouteDescriptor::parse("members.show", "members/{member}", [("member", "Member")])
                .unwrap();

        let params = resolve(&route, CallerParameters::none(), &member).unwrap();
        let builder = PathUrlBuilder::parse("http://localhost").unwrap();
        assert_eq!(
            builder.build(&route, &params).unwrap(),
            "http://localhost/members/Clifford%20James"
        );
    }

    #[test]
    fn test_optional_placeholder_dropped() {
        let store = user_store();
        let user = store.insert(NewRecord::new("User", 1));
        let route =
            RouteDescriptor::parse("users.show", "users/{user}/{tab?}", [("user", "User")])
                .unwrap();

        let params = resolve(&route, CallerParameters::none(), &user).unwrap();
        assert_eq!(PathUrlBuilder::new().build(&route, &params).unwrap(), "/users/1");
    }

    #[test]
    fn test_missing_placeholder() {
        let route =
            RouteDescriptor::parse("users.show", "users/{user}", [("user", "User")]).unwrap();
        let err = PathUrlBuilder::new()
            .build(&route, &ResolvedParameters::default())
            .unwrap_err();
        assert!(matches!(err, RouteError::MissingPlaceholder { ref param, .. } if param == "user"));
    }

    #[test]
    fn test_base_with_path_prefix() {
        let store = user_store();
        let user = store.insert(NewRecord::new("User", 1));
        let route =
            RouteDescriptor::parse("users.show", "users/{user}", [("user", "User")]).unwrap();

        let params = resolve(&route, CallerParameters::none(), &user).unwrap();
        let builder = PathUrlBuilder::parse("https://example.com/app/").unwrap();
        assert_eq!(
            builder.build(&route, &params).unwrap(),
            "https://example.com/app/users/1"
        );
    }

    #[test]
    fn test_unusable_route_keys_are_rejected() {
        let store = RecordStore::new();
        store.define_model(
            "Post",
            ModelSettings {
                route_key: Some("slug".into()),
                base_route: None,
            },
        );
        let route = RouteDescriptor::parse("posts.edit", "posts/{post}/edit", [("post", "Post")])
            .unwrap();
        let relative = PathUrlBuilder::new();
        let absolute = PathUrlBuilder::parse("http://localhost/app/").unwrap();

        for (id, slug) in [(1, ""), (2, "."), (3, "..")] {
            let post = store.insert(NewRecord::new("Post", id).attribute("slug", slug));
            let params = resolve(&route, CallerParameters::none(), &post).unwrap();

            for builder in [&relative, &absolute] {
                let err = builder.build(&route, &params).unwrap_err();
                assert!(
                    matches!(err, RouteError::InvalidSegment { ref param, ref key, .. }
                        if param == "post" && key == slug),
                    "slug {slug:?} gave {err:?}"
                );
            }
        }
    }

    #[test]
    fn test_dotted_route_keys_are_kept() {
        let store = RecordStore::new();
        store.define_model(
            "Post",
            ModelSettings {
                route_key: Some("slug".into()),
                base_route: None,
            },
        );
        let post = store.insert(NewRecord::new("Post", 1).attribute("slug", "..."));
        let route = RouteDescriptor::parse("posts.edit", "posts/{post}/edit", [("post", "Post")])
            .unwrap();

        let params = resolve(&route, CallerParameters::none(), &post).unwrap();
        let builder = PathUrlBuilder::parse("http://localhost").unwrap();
        assert_eq!(builder.build(&route, &params).unwrap(), "http://localhost/posts/.../edit");
    }
}
