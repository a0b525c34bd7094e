//! Core types - pure abstractions shared across the codebase.

mod key;
mod tag;
mod url;

pub use key::RouteKey;
pub use tag::TypeTag;
pub use url::UrlPath;
