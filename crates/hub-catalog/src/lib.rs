//! Catalog, filtering and search for ProductHub.
//!
//! - **Catalog**: Immutable products and articles with id/slug lookups
//! - **Filter**: Category, price, rating, tag and text predicates with one sort pass
//! - **Search**: Weighted substring scoring across products and articles
//!
//! # Example
//!
//! ```rust,ignore
//! use hub_catalog::prelude::*;
//!
//! let catalog = Catalog::bundled()?;
//! let state = FilterState::initial().with_category(Category::Audio);
//! let listed = filter_products(catalog.products(), &state);
//!
//! let hits = search(catalog.products(), catalog.articles(), "flagship", SearchOptions::default())?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod filter;
pub mod search;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Affiliate, Article, Author, Catalog, Category, Price, Product, DEFAULT_FEATURED_ARTICLES,
        DEFAULT_RECENT_ARTICLES,
    };

    // Filter
    pub use crate::filter::{
        all_tags, filter_products, price_span, FilterState, PricePreset, PriceRange, SortBy,
        PRICE_RANGES,
    };

    // Search
    pub use crate::search::{
        search, suggestions, SearchError, SearchHit, SearchOptions, SearchResult,
        DEFAULT_SUGGESTION_LIMIT, MAX_QUERY_LEN,
    };
}
