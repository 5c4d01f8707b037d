//! Product listing filters.
//!
//! A [`FilterState`] is an immutable value; [`filter_products`] applies every
//! active predicate, then one stable sort pass.

mod engine;
mod state;

pub use engine::{all_tags, filter_products, price_span};
pub use state::{FilterState, PricePreset, PriceRange, SortBy, PRICE_RANGES};
