//! Autocomplete suggestions.

use anyhow::Result;
use hub_catalog::search::{suggestions, MIN_SUGGESTION_LEN};

use super::SuggestArgs;
use crate::context::Context;

/// Run the suggest command.
pub fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let limit = args
        .limit
        .unwrap_or(ctx.config.site.search.suggestion_limit);
    let catalog = store.catalog();
    let found = suggestions(catalog.products(), catalog.articles(), &args.partial, limit)?;

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    if found.is_empty() {
        if args.partial.trim().chars().count() < MIN_SUGGESTION_LEN {
            ctx.output.info(&format!(
                "Type at least {} characters for suggestions",
                MIN_SUGGESTION_LEN
            ));
        } else {
            ctx.output.info("No suggestions");
        }
        return Ok(());
    }

    for suggestion in &found {
        ctx.output.list_item(suggestion);
    }

    Ok(())
}
