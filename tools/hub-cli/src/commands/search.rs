//! Search products and articles.

use anyhow::{Context as _, Result};
use hub_catalog::search::{search, SearchOptions};
use hub_storefront::views::SearchHitView;
use serde_json::json;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let options = search_options(&args, ctx.config.site.search.default_limit);

    let catalog = store.catalog();
    let products = match &args.host {
        Some(host) => store.visible_products(host),
        None => catalog.products().iter().collect(),
    };
    let results = search(&products, catalog.articles(), &args.query, options)
        .with_context(|| format!("Search for '{}' failed", args.query))?;
    let hits: Vec<SearchHitView> = results
        .iter()
        .map(|r| SearchHitView::new(r, store.images()))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "query": args.query,
            "total": hits.len(),
            "hits": hits,
        }));
        return Ok(());
    }

    ctx.output
        .header(&format!("{} results for '{}'", hits.len(), args.query));
    if hits.is_empty() {
        ctx.output.info("No matches");
        return Ok(());
    }

    let widths = [8, 36, 6, 40];
    ctx.output
        .table_row(&["TYPE", "TITLE", "SCORE", "PATH"], &widths);
    for hit in &hits {
        ctx.output.table_row(
            &[hit.kind, &hit.title, &hit.score.to_string(), &hit.path],
            &widths,
        );
    }

    Ok(())
}

fn search_options(args: &SearchArgs, default_limit: usize) -> SearchOptions {
    let options = SearchOptions::default().with_limit(args.limit.unwrap_or(default_limit));
    if args.products_only {
        options.products_only()
    } else if args.articles_only {
        options.articles_only()
    } else {
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(products_only: bool, articles_only: bool) -> SearchArgs {
        SearchArgs {
            query: "smart".to_string(),
            host: None,
            limit: None,
            products_only,
            articles_only,
        }
    }

    #[test]
    fn test_default_options_include_both() {
        let options = search_options(&args(false, false), 20);
        assert_eq!(options.limit, 20);
        assert!(options.include_products && options.include_articles);
    }

    #[test]
    fn test_scoped_options() {
        let products = search_options(&args(true, false), 20);
        assert!(products.include_products && !products.include_articles);

        let articles = search_options(&args(false, true), 20);
        assert!(!articles.include_products && articles.include_articles);
    }

    #[test]
    fn test_explicit_limit_wins() {
        let mut a = args(false, false);
        a.limit = Some(3);
        assert_eq!(search_options(&a, 20).limit, 3);
    }
}
