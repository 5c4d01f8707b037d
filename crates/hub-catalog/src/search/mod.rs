//! Site search.
//!
//! Weighted substring scoring over products and articles, plus autocomplete
//! suggestions. Queries are sanitized before matching.

mod query;
mod results;
mod scoring;
mod suggest;

pub use query::{sanitize_query, SearchError, SearchOptions, MAX_QUERY_LEN};
pub use results::{search, SearchHit, SearchResult};
pub use scoring::{article_score, product_score};
pub use suggest::{suggestions, DEFAULT_SUGGESTION_LIMIT, MIN_SUGGESTION_LEN};
