//! Blog article records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::{ArticleId, ProductId};

/// Article author, embedded in the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// A blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    /// URL-friendly slug (unique).
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub author: Author,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    /// Products the article links to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_products: Vec<ProductId>,
    /// Estimated reading time in whole minutes.
    pub read_time: u32,
}

impl Article {
    pub fn page_title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.title)
    }

    pub fn page_description(&self) -> &str {
        self.seo_description.as_deref().unwrap_or(&self.excerpt)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl AsRef<Article> for Article {
    fn as_ref(&self) -> &Article {
        self
    }
}
