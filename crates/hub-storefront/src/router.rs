//! Path dispatch.

use chrono::Utc;
use hub_core::{Method, RequestContext};
use serde::Serialize;

use crate::pages::{
    ArticleDetailPage, BlogIndexPage, HomePage, ProductDetailPage, ProductListingPage, SearchPage,
};
use crate::storefront::Storefront;

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", content = "data", rename_all = "snake_case")]
pub enum Page {
    Home(HomePage),
    ProductListing(ProductListingPage),
    ProductDetail(ProductDetailPage),
    BlogIndex(BlogIndexPage),
    ArticleDetail(ArticleDetailPage),
    Search(SearchPage),
    Suggestions(Vec<String>),
    Sitemap(String),
    Robots(String),
}

impl Page {
    /// Response content type.
    pub fn content_type(&self) -> &'static str {
        match self {
            Page::Sitemap(_) => "application/xml",
            Page::Robots(_) => "text/plain; charset=utf-8",
            _ => "application/json",
        }
    }
}

impl Storefront {
    /// Route a GET or HEAD request to its page.
    ///
    /// | path | page |
    /// |---|---|
    /// | `/` | home |
    /// | `/products` | listing, filters from the query string |
    /// | `/products/{slug}` | product detail |
    /// | `/blog`, `/blog/{slug}` | blog index, article detail |
    /// | `/search?q=` | search |
    /// | `/api/suggest?q=` | suggestions |
    /// | `/sitemap.xml`, `/robots.txt` | crawler files |
    ///
    /// Returns `None` for other methods, unknown paths and unknown slugs.
    pub fn handle(&self, ctx: &RequestContext) -> Option<Page> {
        if !matches!(ctx.method, Method::Get | Method::Head) {
            return None;
        }

        let path = ctx.path.trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Page::Home(self.home(ctx))),
            ["products"] => Some(Page::ProductListing(self.product_listing_from_query(ctx))),
            ["products", slug] => self.product_detail(ctx, slug).map(Page::ProductDetail),
            ["blog"] => Some(Page::BlogIndex(self.blog_index(ctx))),
            ["blog", slug] => self.article_detail(ctx, slug).map(Page::ArticleDetail),
            ["search"] => {
                let query = ctx.query_param("q").unwrap_or_default();
                Some(Page::Search(self.search_page(ctx, query)))
            }
            ["api", "suggest"] => {
                let partial = ctx.query_param("q").unwrap_or_default();
                Some(Page::Suggestions(self.suggest(ctx, partial)))
            }
            ["sitemap.xml"] => Some(Page::Sitemap(self.sitemap(Utc::now()))),
            ["robots.txt"] => Some(Page::Robots(self.robots())),
            _ => {
                tracing::debug!(path = %ctx.path, host = %ctx.host, "no route");
                None
            }
        }
    }
}
