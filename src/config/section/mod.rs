//! Configuration section definitions.
//!
//! Each module corresponds to a section in `routable.toml`:
//!
//! | Module   | TOML Section         | Purpose                          |
//! |----------|----------------------|----------------------------------|
//! | `site`   | `[site]`             | Base URL                         |
//! | `route`  | `[[routes]]`         | Named routes and path templates  |
//! | `model`  | `[models.<Type>]`    | Route key and base route per type|
//! | `record` | `[[records]]`        | Records to generate URLs for     |

mod model;
mod record;
mod route;
mod site;

pub use model::ModelConfig;
pub use record::{RecordConfig, validate_records};
pub use route::{RouteConfig, build_route_table};
pub use site::SiteConfig;
