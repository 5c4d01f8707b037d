//! Serializable view models shared by the pages.

use chrono::{DateTime, Utc};
use hub_catalog::catalog::{Article, Product};
use hub_catalog::search::{SearchHit, SearchResult};
use hub_catalog::Money;
use hub_media::FallbackChain;
use serde::Serialize;

/// Tenant branding shown in the page header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteView {
    pub name: String,
    pub host: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
    /// False when the host fell back to the default config.
    pub configured: bool,
}

/// A product in a grid or list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub slug: String,
    pub path: String,
    pub name: String,
    pub short_description: String,
    pub image: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub discount_percent: u32,
    pub rating: f64,
    pub review_count: u32,
    pub category: String,
    pub purchase_url: String,
}

impl ProductCard {
    pub fn new(product: &Product, images: &FallbackChain) -> Self {
        let price = &product.price;
        Self {
            id: product.id.to_string(),
            slug: product.slug.clone(),
            path: format!("/products/{}", product.slug),
            name: product.name.clone(),
            short_description: product.short_description.clone(),
            image: images.product_image(product).url,
            price: price.current.display(),
            original_price: price
                .original
                .filter(|_| price.is_on_sale())
                .map(|m| m.display()),
            discount_percent: price.discount_percent(),
            rating: product.rating,
            review_count: product.review_count,
            category: product.category.display_name().to_string(),
            purchase_url: product.purchase_url().to_string(),
        }
    }
}

/// Full product record for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub card: ProductCard,
    pub description: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub tags: Vec<String>,
    pub official_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
}

impl ProductView {
    pub fn new(product: &Product, images: &FallbackChain) -> Self {
        let card = ProductCard::new(product, images);
        let gallery = if product.images.is_empty() {
            vec![card.image.clone()]
        } else {
            product.images.clone()
        };

        Self {
            card,
            description: product.description.clone(),
            images: gallery,
            features: product.features.clone(),
            pros: product.pros.clone(),
            cons: product.cons.clone(),
            tags: product.tags.clone(),
            official_url: product.official_url.clone(),
            savings: product.price.savings().map(|m: Money| m.display()),
        }
    }
}

/// An article teaser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCard {
    pub id: String,
    pub slug: String,
    pub path: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub read_time: u32,
    pub category: String,
}

impl ArticleCard {
    pub fn new(article: &Article, images: &FallbackChain) -> Self {
        Self {
            id: article.id.to_string(),
            slug: article.slug.clone(),
            path: format!("/blog/{}", article.slug),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            image: images.article_image(article).url,
            author: article.author.name.clone(),
            published_at: article.published_at,
            read_time: article.read_time,
            category: article.category.display_name().to_string(),
        }
    }
}

/// Full article for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleView {
    #[serde(flatten)]
    pub card: ArticleCard,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleView {
    pub fn new(article: &Article, images: &FallbackChain) -> Self {
        Self {
            card: ArticleCard::new(article, images),
            content: article.content.clone(),
            tags: article.tags.clone(),
            author_avatar: article.author.avatar.clone(),
            updated_at: article.updated_at,
        }
    }
}

/// One row on the search page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHitView {
    /// `product` or `article`.
    pub kind: &'static str,
    pub slug: String,
    pub title: String,
    pub path: String,
    pub summary: String,
    pub image: String,
    pub tags: Vec<String>,
    pub score: u32,
}

impl SearchHitView {
    pub fn new(result: &SearchResult<'_>, images: &FallbackChain) -> Self {
        let (kind, summary, image, tags) = match result.hit {
            SearchHit::Product(p) => (
                "product",
                p.short_description.clone(),
                images.product_image(p).url,
                p.tags.clone(),
            ),
            SearchHit::Article(a) => (
                "article",
                a.excerpt.clone(),
                images.article_image(a).url,
                a.tags.clone(),
            ),
        };

        Self {
            kind,
            slug: result.hit.slug().to_string(),
            title: result.hit.title().to_string(),
            path: result.hit.path(),
            summary,
            image,
            tags,
            score: result.score,
        }
    }
}
