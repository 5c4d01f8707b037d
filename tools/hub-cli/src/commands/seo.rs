//! SEO output: sitemap, robots.txt, JSON-LD and head tags.

use anyhow::{bail, Result};
use chrono::Utc;
use hub_seo::{jsonld, PageMetadata};
use hub_storefront::Storefront;

use super::{SeoArgs, SeoCommand};
use crate::context::Context;

/// Run the seo command.
pub fn run(args: SeoArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    match args.command {
        SeoCommand::Sitemap => {
            ctx.output.raw(&store.sitemap(Utc::now()));
        }
        SeoCommand::Robots => {
            ctx.output.raw(&store.robots());
        }
        SeoCommand::Jsonld { slug } => {
            let data = structured_data(&store, &slug)?;
            ctx.output.json(&data);
        }
        SeoCommand::Head { slug } => {
            let meta = metadata(&store, &slug)?;
            if ctx.output.is_json() {
                ctx.output.json(&meta);
            } else {
                ctx.output.raw(&meta.to_head().render());
            }
        }
    }
    Ok(())
}

fn structured_data(store: &Storefront, slug: &str) -> Result<serde_json::Value> {
    let catalog = store.catalog();
    if let Some(product) = catalog.product_by_slug(slug) {
        return Ok(jsonld::product(product, store.settings()));
    }
    if let Some(article) = catalog.article_by_slug(slug) {
        return Ok(jsonld::article(article, store.settings()));
    }
    bail!("No product or article with slug '{}'", slug)
}

fn metadata(store: &Storefront, slug: &str) -> Result<PageMetadata> {
    let catalog = store.catalog();
    if let Some(product) = catalog.product_by_slug(slug) {
        return Ok(PageMetadata::for_product(store.settings(), product));
    }
    if let Some(article) = catalog.article_by_slug(slug) {
        return Ok(PageMetadata::for_article(store.settings(), article));
    }
    bail!("No product or article with slug '{}'", slug)
}
