//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use hub_core::RequestContext;
use hub_storefront::Storefront;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a configured path relative to the config file's directory,
    /// or the working directory when there is no config file.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(&self.cwd);
        base.join(path)
    }

    /// Build the storefront from the configured data sources.
    pub fn storefront(&self) -> Result<Storefront> {
        let data = &self.config.data;
        let catalog_dir = data.catalog_dir.as_deref().map(|p| self.resolve_path(p));
        let domains_file = data.domains_file.as_deref().map(|p| self.resolve_path(p));

        Storefront::load(
            self.config.site.clone(),
            catalog_dir.as_deref(),
            domains_file.as_deref(),
        )
        .context("Failed to load storefront data")
    }

    /// Host to use when a command gets none.
    pub fn host_or_default(&self, host: Option<&str>) -> String {
        host.map(str::to_string)
            .unwrap_or_else(|| self.config.site.default_host.clone())
    }

    /// Request context for a simulated page request.
    pub fn request(&self, host: Option<&str>, path: &str) -> RequestContext {
        RequestContext::new(self.host_or_default(host), path)
    }
}
