//! Product and article catalog.
//!
//! Records are loaded once and never mutated; `Catalog` indexes them by id
//! and slug.

mod article;
mod category;
mod product;
mod seed;
mod store;

pub use article::{Article, Author};
pub use category::Category;
pub use product::{Affiliate, Price, Product};
pub use store::{Catalog, DEFAULT_FEATURED_ARTICLES, DEFAULT_RECENT_ARTICLES};
