//! Bundled seed data.

use std::path::Path;

use crate::catalog::{Article, Catalog, Product};
use crate::error::CatalogError;

const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
const ARTICLES_JSON: &str = include_str!("../../data/articles.json");

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(PRODUCTS_JSON, ARTICLES_JSON)
    }

    /// Build a catalog from JSON arrays of products and articles.
    pub fn from_json(products: &str, articles: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(products)?;
        let articles: Vec<Article> = serde_json::from_str(articles)?;
        Self::new(products, articles)
    }

    /// Load `products.json` and `articles.json` from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let products = std::fs::read_to_string(dir.join("products.json"))?;
        let articles = std::fs::read_to_string(dir.join("articles.json"))?;
        Self::from_json(&products, &articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.articles().len(), 6);
    }

    #[test]
    fn test_bundled_fields() {
        let catalog = Catalog::bundled().unwrap();
        let phone = catalog.product_by_id("smartphone-x1").unwrap();
        assert_eq!(phone.slug, "smartphone-x1-pro");
        assert_eq!(phone.review_count, 1250);
        assert_eq!(phone.price.current.amount_cents, 499900);
        assert_eq!(phone.category, Category::Smartphones);
        assert!(phone.affiliate.is_some());

        let tutorial = catalog.article_by_slug("smart-home-tutorial").unwrap();
        assert_eq!(tutorial.category, Category::SmartHome);
    }

    #[test]
    fn test_malformed_json_is_seed_error() {
        let err = Catalog::from_json("[{\"id\": 1}]", "[]").unwrap_err();
        assert!(matches!(err, CatalogError::SeedData(_)));
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let err = Catalog::load_dir("/definitely/not/here").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
