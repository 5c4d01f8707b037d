//! Storefront pages for ProductHub.
//!
//! A [`Storefront`] owns the shared catalog and domain table and turns a
//! [`RequestContext`](hub_core::RequestContext) into serializable page view
//! models. Every page is scoped to the tenant domain named by the request's
//! host.

mod error;
mod pages;
mod router;
mod storefront;
pub mod views;

pub use error::StorefrontError;
pub use pages::{
    ArticleDetailPage, BlogIndexPage, HomePage, ProductDetailPage, ProductListingPage, SearchOutcome,
    SearchPage,
};
pub use router::Page;
pub use storefront::Storefront;
