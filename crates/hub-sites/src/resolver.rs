//! Host to domain resolution.

use std::collections::HashSet;
use std::path::Path;

use hub_catalog::ProductId;
use serde::Deserialize;

use crate::domain::DomainConfig;
use crate::error::{SiteError, SiteResult};

const BUNDLED_DOMAINS: &str = include_str!("../data/domains.toml");

#[derive(Deserialize)]
struct DomainTable {
    #[serde(default)]
    domains: Vec<DomainConfig>,
}

/// Drop one leading `www.`.
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Read-only table of tenant domains.
#[derive(Debug, Clone)]
pub struct DomainResolver {
    domains: Vec<DomainConfig>,
    fallback: DomainConfig,
}

impl DomainResolver {
    /// Build a resolver, validating hosts and SEO titles.
    ///
    /// Two entries that collide once `www.` is stripped count as duplicates.
    pub fn new(domains: Vec<DomainConfig>) -> SiteResult<Self> {
        let mut seen = HashSet::new();
        for domain in &domains {
            if domain.host.trim().is_empty() {
                return Err(SiteError::EmptyHost);
            }
            if !seen.insert(strip_www(&domain.host).to_string()) {
                return Err(SiteError::DuplicateHost(domain.host.clone()));
            }
            if domain.seo.title.trim().is_empty() {
                return Err(SiteError::MissingSeoTitle(domain.host.clone()));
            }
        }

        Ok(Self {
            domains,
            fallback: DomainConfig::fallback(),
        })
    }

    /// Parse a TOML table of `[[domains]]` entries.
    pub fn from_toml(source: &str) -> SiteResult<Self> {
        let table: DomainTable = toml::from_str(source)?;
        Self::new(table.domains)
    }

    /// The domain table compiled into the binary.
    pub fn bundled() -> SiteResult<Self> {
        Self::from_toml(BUNDLED_DOMAINS)
    }

    /// Load a domain table from a TOML file.
    pub fn load_file(path: impl AsRef<Path>) -> SiteResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Replace the configuration used for unmatched hosts.
    pub fn with_fallback(mut self, fallback: DomainConfig) -> Self {
        self.fallback = fallback;
        self
    }

    /// Find the configuration for `host`.
    ///
    /// Matches exactly, or after stripping a leading `www.` from both the
    /// stored host and `host`. Matching is otherwise case-sensitive.
    pub fn resolve(&self, host: &str) -> Option<&DomainConfig> {
        let wanted = strip_www(host);
        self.domains
            .iter()
            .find(|d| d.host == host || strip_www(&d.host) == wanted)
    }

    /// Resolve `host`, falling back to [`DomainResolver::default_config`].
    pub fn resolve_or_default(&self, host: &str) -> &DomainConfig {
        match self.resolve(host) {
            Some(config) => config,
            None => {
                tracing::debug!(host, "unconfigured host, using default domain config");
                &self.fallback
            }
        }
    }

    /// Product ids listed for `host`; empty when the host is not configured.
    pub fn visible_product_ids(&self, host: &str) -> Vec<ProductId> {
        self.resolve(host)
            .map(|d| d.products.clone())
            .unwrap_or_default()
    }

    pub fn is_configured(&self, host: &str) -> bool {
        self.resolve(host).is_some()
    }

    /// Hosts in table order.
    pub fn configured_hosts(&self) -> Vec<&str> {
        self.domains.iter().map(|d| d.host.as_str()).collect()
    }

    /// Configuration used for unmatched hosts.
    pub fn default_config(&self) -> &DomainConfig {
        &self.fallback
    }

    pub fn domains(&self) -> &[DomainConfig] {
        &self.domains
    }
}
