//! Relevance weights.
//!
//! Every match is a case-insensitive substring test of the whole query
//! against one field. Callers pass the query already lowercased.

use crate::catalog::{Article, Product};

const PRODUCT_NAME: u32 = 10;
const PRODUCT_SHORT_DESCRIPTION: u32 = 8;
const PRODUCT_SEO_TITLE: u32 = 7;
const PRODUCT_DESCRIPTION: u32 = 6;
const PRODUCT_TAG: u32 = 5;
const PRODUCT_CATEGORY: u32 = 4;
const PRODUCT_FEATURE: u32 = 3;

const ARTICLE_TITLE: u32 = 10;
const ARTICLE_EXCERPT: u32 = 8;
const ARTICLE_ANY_TAG: u32 = 6;
const ARTICLE_CONTENT: u32 = 5;
const ARTICLE_CATEGORY: u32 = 4;

fn hit(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

/// Score a product. Tags and features count once per matching entry.
pub fn product_score(product: &Product, needle: &str) -> u32 {
    let mut score = 0;

    if hit(&product.name, needle) {
        score += PRODUCT_NAME;
    }
    if hit(&product.short_description, needle) {
        score += PRODUCT_SHORT_DESCRIPTION;
    }
    if product.seo_title.as_deref().is_some_and(|t| hit(t, needle)) {
        score += PRODUCT_SEO_TITLE;
    }
    if hit(&product.description, needle) {
        score += PRODUCT_DESCRIPTION;
    }
    score += PRODUCT_TAG * product.tags.iter().filter(|t| hit(t, needle)).count() as u32;
    if hit(product.category.as_str(), needle) {
        score += PRODUCT_CATEGORY;
    }
    score += PRODUCT_FEATURE * product.features.iter().filter(|f| hit(f, needle)).count() as u32;

    score
}

/// Score an article. Tags count once no matter how many match.
pub fn article_score(article: &Article, needle: &str) -> u32 {
    let mut score = 0;

    if hit(&article.title, needle) {
        score += ARTICLE_TITLE;
    }
    if hit(&article.excerpt, needle) {
        score += ARTICLE_EXCERPT;
    }
    if hit(&article.content, needle) {
        score += ARTICLE_CONTENT;
    }
    if article.tags.iter().any(|t| hit(t, needle)) {
        score += ARTICLE_ANY_TAG;
    }
    if hit(article.category.as_str(), needle) {
        score += ARTICLE_CATEGORY;
    }

    score
}
