//! Indexed, read-only catalog store.

use std::collections::{HashMap, HashSet};

use crate::catalog::{Article, Category, Product};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Default count for [`Catalog::recent_articles`].
pub const DEFAULT_RECENT_ARTICLES: usize = 6;

/// Default count for [`Catalog::featured_articles`].
pub const DEFAULT_FEATURED_ARTICLES: usize = 3;

/// Immutable product and article collections.
///
/// Records live in vectors in seed order; id and slug maps point into them.
/// The catalog is built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    articles: Vec<Article>,
    product_ids: HashMap<String, usize>,
    product_slugs: HashMap<String, usize>,
    article_ids: HashMap<String, usize>,
    article_slugs: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating id and slug uniqueness.
    pub fn new(products: Vec<Product>, articles: Vec<Article>) -> Result<Self, CatalogError> {
        let mut product_ids = HashMap::with_capacity(products.len());
        let mut product_slugs = HashMap::with_capacity(products.len());

        for (idx, product) in products.iter().enumerate() {
            validate_product(product)?;
            if product_ids.insert(product.id.to_string(), idx).is_some() {
                return Err(CatalogError::DuplicateProductId(product.id.to_string()));
            }
            if product_slugs.insert(product.slug.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateProductSlug(product.slug.clone()));
            }
        }

        let mut article_ids = HashMap::with_capacity(articles.len());
        let mut article_slugs = HashMap::with_capacity(articles.len());

        for (idx, article) in articles.iter().enumerate() {
            if article_ids.insert(article.id.to_string(), idx).is_some() {
                return Err(CatalogError::DuplicateArticleId(article.id.to_string()));
            }
            if article_slugs.insert(article.slug.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateArticleSlug(article.slug.clone()));
            }
        }

        tracing::debug!(
            products = products.len(),
            articles = articles.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            articles,
            product_ids,
            product_slugs,
            article_ids,
            article_slugs,
        })
    }

    /// All products, in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All articles, in seed order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.product_ids.get(id).map(|&idx| &self.products[idx])
    }

    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.product_slugs.get(slug).map(|&idx| &self.products[idx])
    }

    pub fn article_by_id(&self, id: &str) -> Option<&Article> {
        self.article_ids.get(id).map(|&idx| &self.articles[idx])
    }

    pub fn article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.article_slugs.get(slug).map(|&idx| &self.articles[idx])
    }

    /// Products whose id is in `ids`, in catalog order.
    ///
    /// Unknown ids are dropped without error.
    pub fn products_by_ids(&self, ids: &[ProductId]) -> Vec<&Product> {
        let wanted: HashSet<&str> = ids.iter().map(|id| id.as_str()).collect();
        self.products
            .iter()
            .filter(|p| wanted.contains(p.id.as_str()))
            .collect()
    }

    pub fn products_by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn articles_by_category(&self, category: Category) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Articles carrying `tag` (exact match).
    pub fn articles_by_tag(&self, tag: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.has_tag(tag)).collect()
    }

    /// The `limit` most recently published articles.
    pub fn recent_articles(&self, limit: usize) -> Vec<&Article> {
        let mut sorted: Vec<&Article> = self.articles.iter().collect();
        // Stable sort keeps seed order on ties.
        sorted.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        sorted.truncate(limit);
        sorted
    }

    /// Articles for the home page: the newest `limit`.
    pub fn featured_articles(&self, limit: usize) -> Vec<&Article> {
        self.recent_articles(limit)
    }

    /// Articles related to a product: same category, newest first.
    pub fn articles_for_product(&self, product: &Product, limit: usize) -> Vec<&Article> {
        let mut related: Vec<&Article> = self
            .articles
            .iter()
            .filter(|a| a.category == product.category || a.related_products.contains(&product.id))
            .collect();
        related.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        related.truncate(limit);
        related
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.articles.is_empty()
    }
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    if product.price.current.is_negative() {
        return Err(CatalogError::InvalidRecord {
            id: product.id.to_string(),
            reason: format!("negative price {}", product.price.current.amount_cents),
        });
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(CatalogError::InvalidRecord {
            id: product.id.to_string(),
            reason: format!("rating {} outside 0..=5", product.rating),
        });
    }
    if let Some(original) = product.price.original {
        if original.amount_cents < product.price.current.amount_cents {
            tracing::warn!(
                product = %product.id,
                current = product.price.current.amount_cents,
                original = original.amount_cents,
                "original price below current price, discount shown as 0%"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Author, Price};
    use crate::ids::ArticleId;
    use crate::money::Money;
    use chrono::{TimeZone, Utc};

    fn product(id: &str, slug: &str, cents: i64) -> Product {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Product {
            id: ProductId::new(id),
            slug: slug.to_string(),
            name: id.to_string(),
            description: String::new(),
            short_description: String::new(),
            images: vec![],
            price: Price::new(Money::usd(cents)),
            rating: 4.0,
            review_count: 10,
            features: vec![],
            pros: vec![],
            cons: vec![],
            official_url: "https://example.com".to_string(),
            affiliate: None,
            category: Category::Audio,
            tags: vec![],
            seo_title: None,
            seo_description: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn article(id: &str, day: u32) -> Article {
        let ts = Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap();
        Article {
            id: ArticleId::new(id),
            slug: id.to_string(),
            title: id.to_string(),
            excerpt: String::new(),
            content: String::new(),
            author: Author {
                name: "Editor".to_string(),
                avatar: None,
                bio: None,
            },
            published_at: ts,
            updated_at: ts,
            category: Category::Audio,
            tags: vec!["review".to_string()],
            featured_image: None,
            seo_title: None,
            seo_description: None,
            related_products: vec![],
            read_time: 5,
        }
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let result = Catalog::new(vec![product("a", "a-1", 100), product("a", "a-2", 100)], vec![]);
        assert!(matches!(result, Err(CatalogError::DuplicateProductId(id)) if id == "a"));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = Catalog::new(vec![product("a", "same", 100), product("b", "same", 100)], vec![]);
        assert!(matches!(result, Err(CatalogError::DuplicateProductSlug(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(vec![product("a", "a", -1)], vec![]);
        assert!(matches!(result, Err(CatalogError::InvalidRecord { .. })));
    }

    #[test]
    fn test_original_below_current_is_accepted() {
        let mut p = product("a", "a", 500);
        p.price.original = Some(Money::usd(400));
        assert!(Catalog::new(vec![p], vec![]).is_ok());
    }

    #[test]
    fn test_products_by_ids_keeps_catalog_order() {
        let catalog = Catalog::new(
            vec![product("a", "a", 1), product("b", "b", 2), product("c", "c", 3)],
            vec![],
        )
        .unwrap();

        let ids = [ProductId::new("c"), ProductId::new("missing"), ProductId::new("a")];
        let found: Vec<&str> = catalog
            .products_by_ids(&ids)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(found, vec!["a", "c"]);
    }

    #[test]
    fn test_recent_articles_stable_on_ties() {
        let catalog = Catalog::new(
            vec![],
            vec![article("old", 1), article("tie-1", 5), article("tie-2", 5), article("new", 9)],
        )
        .unwrap();

        let ids: Vec<&str> = catalog
            .recent_articles(3)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new", "tie-1", "tie-2"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![], vec![]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.product_by_id("x").is_none());
        assert!(catalog.recent_articles(DEFAULT_RECENT_ARTICLES).is_empty());
    }
}
