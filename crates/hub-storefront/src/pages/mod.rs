//! Page builders, one `impl Storefront` block per page family.

mod blog;
mod home;
mod products;
mod search;
mod seo;

pub use blog::{ArticleDetailPage, BlogIndexPage};
pub use home::HomePage;
pub use products::{ProductDetailPage, ProductListingPage};
pub use search::{SearchOutcome, SearchPage};
