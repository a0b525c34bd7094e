//! Configuration for `routable.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── model      # [models.<Type>]
//! │   ├── record     # [[records]]
//! │   ├── route      # [[routes]]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # RoutableConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [site]
//! base_url = "http://localhost"
//!
//! [[routes]]
//! name = "users.show"
//! path = "users/{user}"
//! params = { user = "User" }
//!
//! [models.User]
//! route_key = "name"
//!
//! [[records]]
//! type = "User"
//! id = 1
//! attributes = { name = "clifford" }
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{ModelConfig, RecordConfig, RouteConfig, SiteConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::TypeTag;
use crate::log;
use crate::model::RecordStore;
use crate::route::{PathUrlBuilder, RouteTable};

/// Default config file name.
pub const CONFIG_FILE: &str = "routable.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing routable.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutableConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    /// Per-type settings, keyed by type name.
    #[serde(default)]
    pub models: BTreeMap<String, ModelConfig>,

    #[serde(default)]
    pub records: Vec<RecordConfig>,
}

impl RoutableConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        let path = find_config_file(config_name).unwrap_or_else(|| config_name.to_path_buf());
        Self::from_path(&path)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load and validate configuration from a file, warning about unknown
    /// fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, printing warnings and returning all errors
    /// at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Collect diagnostics without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        section::build_route_table(&self.routes, &mut diag);

        let models = FieldPath::new("models");
        for (name, model) in &self.models {
            model.validate(&models.field(name), &mut diag);
        }

        section::validate_records(&self.records, &mut diag);
        diag
    }

    // ========================================================================
    // runtime objects
    // ========================================================================

    /// Route table of all valid routes. Later duplicates replace earlier ones.
    pub fn route_table(&self) -> RouteTable {
        section::build_route_table(&self.routes, &mut ConfigDiagnostics::new())
    }

    /// URL builder over `[site] base_url`; root-relative without one.
    pub fn url_builder(&self) -> PathUrlBuilder {
        self.site
            .parsed_base_url()
            .map(PathUrlBuilder::with_base)
            .unwrap_or_default()
    }

    /// Record store with model settings applied.
    pub fn record_store(&self) -> Arc<RecordStore> {
        let store = RecordStore::new();
        for (name, model) in &self.models {
            store.define_model(TypeTag::owned(name.clone()), model.into());
        }
        for record in &self.records {
            store.insert(record.to_new_record());
        }
        store
    }
}

// ============================================================================
// tests
// ============================================================================
