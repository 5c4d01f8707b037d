//! Site-wide settings.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Settings shared by every tenant domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site brand name (used in structured data and page titles).
    #[serde(default = "default_name")]
    pub name: String,
    /// Canonical base URL, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Host used when a request carries no `Host` header.
    #[serde(default = "default_host")]
    pub default_host: String,
    /// Search limits.
    #[serde(default)]
    pub search: SearchSettings,
    /// Logging output.
    #[serde(default)]
    pub logging: LogSettings,
}

fn default_name() -> String {
    "ProductHub".to_string()
}

fn default_base_url() -> String {
    "https://producthub.com".to_string()
}

fn default_host() -> String {
    "localhost:3000".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            base_url: default_base_url(),
            default_host: default_host(),
            search: SearchSettings::default(),
            logging: LogSettings::default(),
        }
    }
}

impl SiteSettings {
    /// Set the base URL (a trailing slash is dropped).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the default host.
    pub fn with_default_host(mut self, host: impl Into<String>) -> Self {
        self.default_host = host.into();
        self
    }

    /// Join a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() || path == "/" {
            base.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CoreError::ConfigError(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.default_host.trim().is_empty() {
            return Err(CoreError::ConfigError("default_host is empty".to_string()));
        }
        self.search.validate()
    }
}

/// Result-count limits for the search surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Limit used when a caller does not pass one.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Limit used by the search page.
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
    /// Maximum number of autocomplete suggestions.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_limit() -> usize {
    20
}

fn default_page_limit() -> usize {
    50
}

fn default_suggestion_limit() -> usize {
    5
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            page_limit: default_page_limit(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl SearchSettings {
    fn validate(&self) -> Result<(), CoreError> {
        if self.default_limit == 0 || self.page_limit == 0 {
            return Err(CoreError::ConfigError(
                "search limits must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `json` or `human`.
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SiteSettings::default();
        assert_eq!(settings.name, "ProductHub");
        assert_eq!(settings.default_host, "localhost:3000");
        assert_eq!(settings.search.default_limit, 20);
        assert_eq!(settings.search.page_limit, 50);
        assert_eq!(settings.search.suggestion_limit, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: SiteSettings = toml::from_str(
            r#"
            base_url = "https://tech-reviews.com"

            [search]
            page_limit = 25
            "#,
        )
        .unwrap();

        assert_eq!(settings.base_url, "https://tech-reviews.com");
        assert_eq!(settings.search.page_limit, 25);
        assert_eq!(settings.search.default_limit, 20);
        assert_eq!(settings.logging.format, "human");
    }

    #[test]
    fn test_url_join() {
        let settings = SiteSettings::default().with_base_url("https://producthub.com/");
        assert_eq!(settings.url("/"), "https://producthub.com");
        assert_eq!(settings.url("/products/x"), "https://producthub.com/products/x");
        assert_eq!(settings.url("blog"), "https://producthub.com/blog");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let settings = SiteSettings::default().with_base_url("producthub.com");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut settings = SiteSettings::default();
        settings.search.page_limit = 0;
        assert!(settings.validate().is_err());
    }
}
