//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! base_url = "https://example.com/app"
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL that generated paths are joined onto. Without it, URLs are
    /// root-relative paths.
    pub base_url: Option<String>,
}

impl SiteConfig {
    pub const SECTION: &'static str = "site";

    fn base_url_field() -> FieldPath {
        FieldPath::new(Self::SECTION).field("base_url")
    }

    /// Parsed base URL, if set and valid.
    pub fn parsed_base_url(&self) -> Option<Url> {
        self.base_url.as_deref().and_then(|s| Url::parse(s).ok())
    }

    /// # Checks
    /// - `base_url` parses and has a host
    /// - `base_url` can take a path (no `mailto:` style URLs)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.base_url else {
            return;
        };

        match Url::parse(url_str) {
            Ok(parsed) => {
                if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::base_url_field(),
                        format!("`{url_str}` cannot be used as a base URL"),
                        "use format like https://example.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.warn(
                        Self::base_url_field(),
                        "query and fragment of the base URL are dropped from generated URLs",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::base_url_field(),
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(base_url: &str) -> ConfigDiagnostics {
        let site = SiteConfig {
            base_url: Some(base_url.into()),
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_base_url() {
        assert!(check("http://localhost").is_empty());
        assert!(check("https://example.com/app/").is_empty());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(check("localhost").has_errors());
        assert!(check("mailto:someone@example.com").has_errors());
    }

    #[test]
    fn test_no_base_url() {
        let mut diag = ConfigDiagnostics::new();
        SiteConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
        assert!(SiteConfig::default().parsed_base_url().is_none());
    }
}
