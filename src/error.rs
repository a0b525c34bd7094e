//! Route resolution error types.

use thiserror::Error;

/// Errors raised while turning a routable into a URL.
///
/// All variants are deterministic: retrying the same call with the same
/// inputs fails the same way.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route `{name}` is not registered")]
    NotFound { name: String },

    #[error("route `{route}` has unresolved parameters: {}", .missing.join(", "))]
    NotResolvable { route: String, missing: Vec<String> },

    #[error("nested parameter map at position {index} must be the only argument")]
    NestedParameters { index: usize },

    #[error("route `{route}` has no value for placeholder `{{{param}}}`")]
    MissingPlaceholder { route: String, param: String },

    #[error("route `{route}` cannot use `{key}` as the value of placeholder `{{{param}}}`")]
    InvalidSegment {
        route: String,
        param: String,
        key: String,
    },

    #[error("route `{route}` produced an invalid URL")]
    InvalidUrl {
        route: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T, E = RouteError> = std::result::Result<T, E>;
