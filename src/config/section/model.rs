//! `[models.<Type>]` configuration.
//!
//! ```toml
//! [models.User]
//! route_key = "name"      # attribute used in URLs instead of the id
//! base_route = "profiles" # route group instead of `users`
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::model::ModelSettings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub route_key: Option<String>,
    pub base_route: Option<String>,
}

impl ModelConfig {
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.route_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            diag.error_with_hint(
                field.field("route_key"),
                "route key attribute is empty",
                "remove the field to route by id",
            );
        }

        if let Some(base) = &self.base_route {
            if base.trim().is_empty() {
                diag.error(field.field("base_route"), "base route is empty");
            } else if base.contains('.') {
                diag.error_with_hint(
                    field.field("base_route"),
                    format!("base route `{base}` contains `.`"),
                    "the action is appended as `base.action`",
                );
            }
        }
    }
}

impl From<&ModelConfig> for ModelSettings {
    fn from(config: &ModelConfig) -> Self {
        Self {
            route_key: config.route_key.clone(),
            base_route: config.base_route.clone(),
        }
    }
}
