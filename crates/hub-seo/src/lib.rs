//! Search-engine facing output for ProductHub.
//!
//! - `jsonld` - schema.org structured data for products, articles and the site
//! - `PageMetadata` / `HeadContent` - title, meta, Open Graph and Twitter tags
//! - `sitemap` - sitemap entries and XML
//! - `Robots` - robots.txt rules

mod escape;
pub mod jsonld;
mod metadata;
mod robots;
pub mod sitemap;

pub use metadata::{HeadContent, OgImage, OpenGraph, PageMetadata, TwitterCard};
pub use robots::{Robots, RobotsRule};
pub use sitemap::{ChangeFrequency, SitemapEntry};
