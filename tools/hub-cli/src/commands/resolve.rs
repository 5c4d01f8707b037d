//! Show which domain configuration a host resolves to.

use anyhow::Result;
use serde_json::json;

use super::ResolveArgs;
use crate::context::Context;

/// Run the resolve command.
pub fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let host = ctx.host_or_default(args.host.as_deref());
    let sites = store.sites();
    let configured = sites.is_configured(&host);
    let domain = store.domain(&host);
    let visible = store.visible_products(&host);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "host": host,
            "configured": configured,
            "domain": domain,
            "visible_products": visible.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Domain: {}", host));
    if configured {
        ctx.output.success(&format!("Matched configured host '{}'", domain.host));
    } else {
        ctx.output
            .warn("Host is not configured; using default SEO and an empty catalog");
    }

    ctx.output.kv("title", &domain.seo.title);
    ctx.output.kv("description", &domain.seo.description);
    if !domain.seo.keywords.is_empty() {
        ctx.output.kv("keywords", &domain.seo.keywords.join(", "));
    }
    if let Some(color) = domain.primary_color() {
        ctx.output.kv("primary_color", color);
    }
    if let Some(logo) = domain.logo() {
        ctx.output.kv("logo", logo);
    }
    if let Some(ga) = domain.google_analytics_id() {
        ctx.output.kv("google_analytics", ga);
    }

    ctx.output.header(&format!("Visible products ({})", visible.len()));
    for product in &visible {
        ctx.output
            .list_item(&format!("{} ({})", product.name, product.slug));
    }

    Ok(())
}
