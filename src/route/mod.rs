//! Routes: descriptors, the registry and URL building.
//!
//! | Module       | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `descriptor` | Route descriptors parsed from path templates   |
//! | `registry`   | `RouteRegistry` trait and the `RouteTable`     |
//! | `builder`    | `UrlBuilder` trait and the `PathUrlBuilder`    |

mod builder;
mod descriptor;
mod registry;

pub use builder::{PathUrlBuilder, UrlBuilder};
pub use descriptor::{RouteDescriptor, RouteParameter, Segment, TemplateError};
pub use registry::{RouteRegistry, RouteTable};
