//! Product records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;

/// Current and optional pre-discount price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Price the product sells for now.
    pub current: Money,
    /// List price before discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<Money>,
}

impl Price {
    /// Create a price without a discount.
    pub fn new(current: Money) -> Self {
        Self {
            current,
            original: None,
        }
    }

    /// Set the original (pre-discount) price.
    pub fn with_original(mut self, original: Money) -> Self {
        self.original = Some(original);
        self
    }

    /// Check if the product sells below its original price.
    pub fn is_on_sale(&self) -> bool {
        self.original
            .map(|orig| orig.amount_cents > self.current.amount_cents)
            .unwrap_or(false)
    }

    /// Rounded discount percentage.
    ///
    /// Returns 0 when there is no original price, the original is zero, or
    /// the original is below the current price.
    pub fn discount_percent(&self) -> u32 {
        match self.original {
            Some(orig) if orig.amount_cents > 0 && orig.amount_cents > self.current.amount_cents => {
                let savings = (orig.amount_cents - self.current.amount_cents) as f64;
                (savings / orig.amount_cents as f64 * 100.0).round() as u32
            }
            _ => 0,
        }
    }

    /// Amount saved against the original price, if on sale.
    pub fn savings(&self) -> Option<Money> {
        self.original
            .filter(|_| self.is_on_sale())
            .map(|orig| Money::new(orig.amount_cents - self.current.amount_cents, orig.currency))
    }
}

/// Affiliate purchase link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliate {
    pub url: String,
    /// Commission in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug (unique, the external key).
    pub slug: String,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Short description for listings.
    pub short_description: String,
    /// Image references, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Price.
    pub price: Price,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews.
    pub review_count: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    /// Official store URL.
    pub official_url: String,
    /// Affiliate link, preferred over the official URL when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<Affiliate>,
    /// Category.
    pub category: Category,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// URL the "buy" button should point at.
    pub fn purchase_url(&self) -> &str {
        self.affiliate
            .as_ref()
            .map(|a| a.url.as_str())
            .unwrap_or(&self.official_url)
    }

    /// First image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }

    /// Title for `<title>` and Open Graph, falling back to the name.
    pub fn page_title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.name)
    }

    /// Description for meta tags, falling back to the short description.
    pub fn page_description(&self) -> &str {
        self.seo_description
            .as_deref()
            .unwrap_or(&self.short_description)
    }

    /// Check if the product carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}
