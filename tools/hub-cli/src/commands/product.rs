//! Show a product detail page.

use anyhow::{anyhow, Result};

use super::ProductArgs;
use crate::context::Context;
use crate::output::rating_stars;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let request = ctx.request(args.host.as_deref(), &format!("/products/{}", args.slug));
    let page = store
        .product_detail(&request, &args.slug)
        .ok_or_else(|| anyhow!("Product not found: {}", args.slug))?;

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    let product = &page.product;
    ctx.output.header(&product.card.name);
    ctx.output.info(&product.card.short_description);
    ctx.output.info("");
    ctx.output.kv("price", &product.card.price);
    if let (Some(original), Some(savings)) = (&product.card.original_price, &product.savings) {
        ctx.output.kv(
            "was",
            &format!("{} (save {}, {}% off)", original, savings, page.discount_percent),
        );
    }
    ctx.output.kv("rating", &format!(
        "{} ({} reviews)",
        rating_stars(product.card.rating),
        product.card.review_count
    ));
    ctx.output.kv("category", &product.card.category);
    ctx.output.kv("buy", &product.card.purchase_url);
    ctx.output.kv("canonical", &page.meta.canonical);

    if !product.features.is_empty() {
        ctx.output.header("Features");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }

    if !page.related_products.is_empty() {
        ctx.output.header("Related products");
        for card in &page.related_products {
            ctx.output.list_item(&format!("{} - {}", card.name, card.price));
        }
    }

    if !page.related_articles.is_empty() {
        ctx.output.header("Related articles");
        for card in &page.related_articles {
            ctx.output.list_item(&format!("{} ({})", card.title, card.path));
        }
    }

    Ok(())
}
