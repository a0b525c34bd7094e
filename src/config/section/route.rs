//! `[[routes]]` configuration.
//!
//! ```toml
//! [[routes]]
//! name = "threads.show"
//! path = "channels/{channel}/threads/{thread}"
//! params = { channel = "Channel", thread = "Thread" }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::route::{RouteDescriptor, RouteTable, TemplateError};

/// One route definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route name, `{base}.{action}` (e.g. `users.edit`).
    pub name: String,
    /// Path template with `{param}` / `{param?}` placeholders.
    pub path: String,
    /// Expected type per placeholder. Unlisted placeholders are untyped.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl RouteConfig {
    pub fn to_descriptor(&self) -> Result<RouteDescriptor, TemplateError> {
        RouteDescriptor::parse(
            self.name.clone(),
            &self.path,
            self.params
                .iter()
                .map(|(name, ty)| (name.clone(), ty.clone())),
        )
    }
}

/// Build a route table, reporting invalid and replaced routes.
pub fn build_route_table(routes: &[RouteConfig], diag: &mut ConfigDiagnostics) -> RouteTable {
    let section = FieldPath::new("routes");
    let mut table = RouteTable::new();

    for (index, route) in routes.iter().enumerate() {
        let field = section.index(index);

        if route.name.trim().is_empty() {
            diag.error(field.field("name"), "route name is empty");
            continue;
        }
        if !route.name.contains('.') {
            diag.warn(
                field.field("name"),
                format!(
                    "`{}` is not of the form `base.action`; only reachable by explicit name",
                    route.name
                ),
            );
        }

        let descriptor = match route.to_descriptor() {
            Ok(descriptor) => descriptor,
            Err(err) => {
                let at = match &err {
                    TemplateError::UnknownParameter(param) => field.field("params").field(param),
                    _ => field.field("path"),
                };
                diag.error(at, err.to_string());
                continue;
            }
        };

        if table.insert(descriptor).is_some() {
            diag.warn(
                field.field("name"),
                format!("`{}` replaces an earlier route of the same name", route.name),
            );
        }
    }

    table
}
