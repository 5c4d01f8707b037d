//! Autocomplete suggestions.

use std::collections::HashSet;

use crate::catalog::{Article, Product};
use crate::search::query::{sanitize_query, SearchError};

/// Shortest cleaned query that produces suggestions.
pub const MIN_SUGGESTION_LEN: usize = 2;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Distinct product names, product tags and article titles containing the
/// query, in first-seen order (each product's name before its tags, all
/// products before articles).
pub fn suggestions<P, A>(
    products: &[P],
    articles: &[A],
    partial: &str,
    limit: usize,
) -> Result<Vec<String>, SearchError>
where
    P: AsRef<Product>,
    A: AsRef<Article>,
{
    let cleaned = sanitize_query(partial)?;
    if cleaned.chars().count() < MIN_SUGGESTION_LEN {
        return Ok(Vec::new());
    }
    let needle = cleaned.to_lowercase();

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut push = |candidate: &str| {
        if candidate.to_lowercase().contains(&needle) && seen.insert(candidate.to_string()) {
            out.push(candidate.to_string());
        }
    };

    for product in products {
        let product: &Product = product.as_ref();
        push(&product.name);
        for tag in &product.tags {
            push(tag);
        }
    }
    for article in articles {
        let article: &Article = article.as_ref();
        push(&article.title);
    }

    out.truncate(limit);
    Ok(out)
}
