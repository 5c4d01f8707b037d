use hub_catalog::search::{search, suggestions, SearchOptions};
use hub_core::RequestContext;
use hub_seo::PageMetadata;
use serde::Serialize;

use crate::storefront::Storefront;
use crate::views::{SearchHitView, SiteView};

/// Result state of the search page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// No query entered yet.
    Idle,
    Results { total: usize, hits: Vec<SearchHitView> },
    /// The query was rejected; the page shows a generic failure.
    Failed { message: String },
}

impl SearchOutcome {
    pub fn hits(&self) -> &[SearchHitView] {
        match self {
            SearchOutcome::Results { hits, .. } => hits,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SearchOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub site: SiteView,
    pub meta: PageMetadata,
    pub query: String,
    pub outcome: SearchOutcome,
}

impl Storefront {
    /// Search the whole catalog, products and articles.
    pub fn search_page(&self, ctx: &RequestContext, query: &str) -> SearchPage {
        let mut scope = self.scope(ctx, "search");
        let options = SearchOptions::default().with_limit(self.settings().search.page_limit);

        let outcome = if query.trim().is_empty() {
            SearchOutcome::Idle
        } else {
            let catalog = self.catalog();
            match search(catalog.products(), catalog.articles(), query, options) {
                Ok(results) => {
                    let hits: Vec<SearchHitView> = results
                        .iter()
                        .map(|r| SearchHitView::new(r, self.images()))
                        .collect();
                    SearchOutcome::Results {
                        total: hits.len(),
                        hits,
                    }
                }
                Err(e) => {
                    let _entered = scope.span.enter();
                    scope
                        .logger
                        .warn_builder("search rejected")
                        .field("error", e.to_string())
                        .emit();
                    SearchOutcome::Failed {
                        message: "Search failed. Please try a shorter query.".to_string(),
                    }
                }
            }
        };

        scope.data_ready();

        let meta = PageMetadata::new(
            self.settings(),
            "Search Products & Articles",
            "Search through our database of product reviews, buying guides, and tech articles.",
        )
        .with_keywords(vec![
            "search products".to_string(),
            "product search".to_string(),
            "tech reviews search".to_string(),
            "buying guides search".to_string(),
        ])
        .with_path(self.settings(), "/search");

        scope.rendered(outcome.hits().len());
        SearchPage {
            site: self.site_view(&ctx.host),
            meta,
            query: query.to_string(),
            outcome,
        }
    }

    /// Autocomplete suggestions; a rejected query yields none.
    pub fn suggest(&self, ctx: &RequestContext, partial: &str) -> Vec<String> {
        let mut scope = self.scope(ctx, "suggest");
        let catalog = self.catalog();
        let found = suggestions(
            catalog.products(),
            catalog.articles(),
            partial,
            self.settings().search.suggestion_limit,
        )
        .unwrap_or_default();
        scope.data_ready();
        scope.rendered(found.len());
        found
    }
}
