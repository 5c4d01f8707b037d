//! Catalog error types.

use thiserror::Error;

/// Errors raised while building the catalog.
///
/// Lookups never fail; they return `Option`. These errors only come from
/// loading and validating seed data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Two products share a slug.
    #[error("Duplicate product slug: {0}")]
    DuplicateProductSlug(String),

    /// Two articles share an id.
    #[error("Duplicate article id: {0}")]
    DuplicateArticleId(String),

    /// Two articles share a slug.
    #[error("Duplicate article slug: {0}")]
    DuplicateArticleSlug(String),

    /// A record failed validation.
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Seed data could not be parsed.
    #[error("Seed data error: {0}")]
    SeedData(String),

    /// Seed data could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SeedData(e.to_string())
    }
}
