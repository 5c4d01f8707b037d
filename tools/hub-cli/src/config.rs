//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hub_core::SiteSettings;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["producthub.toml", ".producthub.toml", "producthub.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Site settings.
    #[serde(default)]
    pub site: SiteSettings,

    /// Data sources.
    #[serde(default)]
    pub data: DataConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where catalog and domain data come from. Unset means bundled data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding `products.json` and `articles.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,

    /// Domain table in TOML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains_file: Option<PathBuf>,
}

/// Generate a default producthub.toml config file.
pub fn generate_default_config(base_url: &str) -> String {
    format!(
        r#"# ProductHub configuration

[site]
name = "ProductHub"
base_url = "{base_url}"
default_host = "localhost:3000"

[site.search]
default_limit = 20
page_limit = 50
suggestion_limit = 5

[site.logging]
format = "human"
level = "info"

[data]
# catalog_dir = "data"
# domains_file = "domains.toml"
"#,
        base_url = base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("https://example.com")).unwrap();
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.site.search.page_limit, 50);
        assert!(config.data.catalog_dir.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.site.default_host, "localhost:3000");
    }
}
