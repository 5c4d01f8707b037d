//! Ranked search results.

use serde::Serialize;

use crate::catalog::{Article, Product};
use crate::search::query::{sanitize_query, SearchError, SearchOptions};
use crate::search::scoring::{article_score, product_score};

/// The record a search result points at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "item", rename_all = "lowercase")]
pub enum SearchHit<'a> {
    Product(&'a Product),
    Article(&'a Article),
}

impl<'a> SearchHit<'a> {
    pub fn slug(&self) -> &'a str {
        match self {
            SearchHit::Product(p) => &p.slug,
            SearchHit::Article(a) => &a.slug,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            SearchHit::Product(p) => &p.name,
            SearchHit::Article(a) => &a.title,
        }
    }

    /// Site path of the record.
    pub fn path(&self) -> String {
        match self {
            SearchHit::Product(p) => format!("/products/{}", p.slug),
            SearchHit::Article(a) => format!("/blog/{}", a.slug),
        }
    }

    pub fn is_product(&self) -> bool {
        matches!(self, SearchHit::Product(_))
    }
}

/// A scored match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub hit: SearchHit<'a>,
    pub score: u32,
}

/// Search products and articles.
///
/// Products come before articles ahead of a stable sort on descending score,
/// so equal scores keep that order. Zero scores are dropped. A query that is
/// empty after cleaning yields no results.
pub fn search<'a, P, A>(
    products: &'a [P],
    articles: &'a [A],
    query: &str,
    options: SearchOptions,
) -> Result<Vec<SearchResult<'a>>, SearchError>
where
    P: AsRef<Product>,
    A: AsRef<Article>,
{
    let cleaned = sanitize_query(query)?;
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }
    let needle = cleaned.to_lowercase();

    let mut results = Vec::new();

    if options.include_products {
        results.extend(products.iter().filter_map(|p| {
            let product: &'a Product = p.as_ref();
            let score = product_score(product, &needle);
            (score > 0).then_some(SearchResult {
                hit: SearchHit::Product(product),
                score,
            })
        }));
    }

    if options.include_articles {
        results.extend(articles.iter().filter_map(|a| {
            let article: &'a Article = a.as_ref();
            let score = article_score(article, &needle);
            (score > 0).then_some(SearchResult {
                hit: SearchHit::Article(article),
                score,
            })
        }));
    }

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(options.limit);

    tracing::debug!(query = %cleaned, results = results.len(), "search completed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_empty_query_yields_nothing() {
        let catalog = Catalog::bundled().unwrap();
        for q in ["", "   ", "<p></p>"] {
            let results =
                search(catalog.products(), catalog.articles(), q, SearchOptions::default())
                    .unwrap();
            assert!(results.is_empty(), "query {:?}", q);
        }
    }

    #[test]
    fn test_too_long_query_is_error() {
        let catalog = Catalog::bundled().unwrap();
        let err = search(
            catalog.products(),
            catalog.articles(),
            &"x".repeat(101),
            SearchOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, SearchError::QueryTooLong { len: 101, max: 100 });
    }

    #[test]
    fn test_results_sorted_descending() {
        let catalog = Catalog::bundled().unwrap();
        let results = search(
            catalog.products(),
            catalog.articles(),
            "smart",
            SearchOptions::default(),
        )
        .unwrap();

        assert!(!results.is_empty());
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|r| r.score > 0));
    }

    #[test]
    fn test_flagship_finds_phone_not_laptop() {
        let catalog = Catalog::bundled().unwrap();
        let results = search(
            catalog.products(),
            catalog.articles(),
            "flagship",
            SearchOptions::default().products_only(),
        )
        .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].hit.slug(), "smartphone-x1-pro");
        assert!(results[0].score >= 5);
    }

    #[test]
    fn test_include_flags() {
        let catalog = Catalog::bundled().unwrap();
        let articles = search(
            catalog.products(),
            catalog.articles(),
            "smart",
            SearchOptions::default().articles_only(),
        )
        .unwrap();
        assert!(articles.iter().all(|r| !r.hit.is_product()));

        let none = search(
            catalog.products(),
            catalog.articles(),
            "smart",
            SearchOptions {
                include_products: false,
                include_articles: false,
                ..SearchOptions::default()
            },
        )
        .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_limit_truncates() {
        let catalog = Catalog::bundled().unwrap();
        let results = search(
            catalog.products(),
            catalog.articles(),
            "e",
            SearchOptions::default().with_limit(3),
        )
        .unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_ties_keep_input_order_products_first() {
        let catalog = Catalog::bundled().unwrap();
        let mut products: Vec<Product> = catalog.products()[..3].to_vec();
        for (product, (slug, name)) in products.iter_mut().zip([
            ("zyx-second", "Zyx Second"),
            ("zyx-first", "Zyx First"),
            ("zyx-best", "Zyx Best"),
        ]) {
            product.slug = slug.to_string();
            product.name = name.to_string();
        }
        products[2].short_description = "The zyx everyone wants".to_string();

        let mut article: Article = catalog.articles()[0].clone();
        article.slug = "zyx-guide".to_string();
        article.title = "Zyx Guide".to_string();

        let articles = vec![article];

        let results = search(&products, &articles, "zyx", SearchOptions::default()).unwrap();
        let order: Vec<(&str, u32)> = results.iter().map(|r| (r.hit.slug(), r.score)).collect();
        assert_eq!(
            order,
            vec![("zyx-best", 18), ("zyx-second", 10), ("zyx-first", 10), ("zyx-guide", 10)]
        );
    }

    #[test]
    fn test_result_serializes_with_type_tag() {
        let catalog = Catalog::bundled().unwrap();
        let results = search(
            catalog.products(),
            catalog.articles(),
            "flagship",
            SearchOptions::default().products_only(),
        )
        .unwrap();
        let json = serde_json::to_value(results[0]).unwrap();
        assert_eq!(json["type"], "product");
        assert_eq!(json["item"]["id"], "smartphone-x1");
        assert!(json["score"].as_u64().unwrap() >= 5);
    }
}
