//! Per-domain configuration records.

use hub_catalog::ProductId;
use serde::{Deserialize, Serialize};

/// Branding for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

/// SEO defaults used when a page has no more specific values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoDefaults {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Analytics ids injected into pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_pixel_id: Option<String>,
}

/// Configuration for one tenant host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Host as sent in the `Host` header, port included.
    pub host: String,
    /// Products shown on this domain, in display order.
    #[serde(default)]
    pub products: Vec<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    pub seo: SeoDefaults,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
}

impl DomainConfig {
    /// Configuration used for hosts that are not in the table.
    pub fn fallback() -> Self {
        Self {
            host: "localhost:3000".to_string(),
            products: vec![ProductId::new("default-product")],
            theme: None,
            seo: SeoDefaults {
                title: "ProductHub - Professional Product Reviews".to_string(),
                description: "Professional product review and promotion platform providing you with authentic product experiences and purchase recommendations".to_string(),
                keywords: vec![
                    "product reviews".to_string(),
                    "product recommendations".to_string(),
                    "buying guide".to_string(),
                    "product comparison".to_string(),
                ],
            },
            analytics: None,
        }
    }

    pub fn logo(&self) -> Option<&str> {
        self.theme.as_ref().and_then(|t| t.logo.as_deref())
    }

    pub fn primary_color(&self) -> Option<&str> {
        self.theme.as_ref().and_then(|t| t.primary_color.as_deref())
    }

    pub fn google_analytics_id(&self) -> Option<&str> {
        self.analytics
            .as_ref()
            .and_then(|a| a.google_analytics_id.as_deref())
    }

    /// Check whether `id` is listed for this domain.
    pub fn shows_product(&self, id: &ProductId) -> bool {
        self.products.contains(id)
    }
}
