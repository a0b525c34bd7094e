//! Route names and URL parameters for routable domain objects.
//!
//! A [`Routable`] knows its type and route key. From that, this crate
//! derives a route name (`users.show`), resolves the named route's
//! parameters from caller values, the object itself and its relations, and
//! hands them to a [`UrlBuilder`].
//!
//! ```ignore
//! let generator = UrlGenerator::new(&routes, &builder);
//! thread.route(None);                                         // "threads.show"
//! thread.url(&generator, None, CallerParameters::none())?;    // ".../channels/3/threads/7"
//! ```
//!
//! | Module      | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `core`      | Type tags, route keys, encoded URL paths          |
//! | `model`     | The `Routable` trait, relations, record store     |
//! | `naming`    | Base route and route name derivation              |
//! | `route`     | Route descriptors, registry, URL builder          |
//! | `resolve`   | Parameter resolution                              |
//! | `generator` | `UrlGenerator` and the `HasUrl` extension trait   |
//! | `config`    | `routable.toml` loading and validation            |
//! | `cli`       | Command implementations for the binary            |

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod generator;
pub mod logger;
pub mod model;
pub mod naming;
pub mod resolve;
pub mod route;
pub mod utils;

pub use crate::core::{RouteKey, TypeTag, UrlPath};
pub use error::{Result, RouteError};
pub use generator::{HasUrl, UrlGenerator};
pub use model::{BaseRoute, Relations, Routable, RoutableRef};
pub use resolve::{CallerParameters, ParamMap, ParamValue, ResolvedParameters};
pub use route::{PathUrlBuilder, RouteDescriptor, RouteRegistry, RouteTable, UrlBuilder};
