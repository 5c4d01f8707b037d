//! List a domain's products through the filter engine.

use anyhow::{bail, Result};
use hub_catalog::catalog::Category;
use hub_catalog::filter::{FilterState, PriceRange, SortBy};

use super::ProductsArgs;
use crate::context::Context;
use crate::output::rating_stars;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let filters = filter_state(&args)?;
    let store = ctx.storefront()?;
    let request = ctx.request(args.host.as_deref(), "/products");
    let page = store.product_listing(&request, filters);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} - {} of {} products",
        page.site.title,
        page.products.len(),
        page.total
    ));
    if page.has_filters {
        ctx.output.kv("filters", &page.query_string);
    }
    ctx.output.kv("sort", page.filters.sort_by.display_name());
    ctx.output.info("");

    let widths = [28, 12, 12, 14];
    ctx.output
        .table_row(&["NAME", "PRICE", "CATEGORY", "RATING"], &widths);
    for card in &page.products {
        let price = match &card.original_price {
            Some(_) => format!("{} -{}%", card.price, card.discount_percent),
            None => card.price.clone(),
        };
        ctx.output.table_row(
            &[&card.name, &price, &card.category, &rating_stars(card.rating)],
            &widths,
        );
    }

    if page.products.is_empty() {
        ctx.output.warn("No products match these filters");
    }

    Ok(())
}

fn filter_state(args: &ProductsArgs) -> Result<FilterState> {
    let mut state = FilterState::initial();

    if let Some(slug) = &args.category {
        let Some(category) = Category::from_str(slug) else {
            let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            bail!("Unknown category '{}' (expected one of: {})", slug, known.join(", "));
        };
        state = state.with_category(category);
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let min = args.min_price.unwrap_or(0);
        if let Some(max) = args.max_price {
            if max < min {
                bail!("--max-price ({}) is below --min-price ({})", max, min);
            }
        }
        state = state.with_price_range(PriceRange::dollars(min, args.max_price));
    }

    if let Some(rating) = args.rating {
        state = state.with_min_rating(rating);
    }
    for tag in &args.tag {
        state = state.with_tag(tag.as_str());
    }
    if let Some(query) = &args.query {
        state = state.with_query(query.as_str());
    }
    if let Some(sort) = &args.sort {
        state = state.with_sort(SortBy::from_str(sort));
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProductsArgs {
        ProductsArgs {
            host: None,
            category: None,
            min_price: None,
            max_price: None,
            rating: None,
            tag: Vec::new(),
            query: None,
            sort: None,
        }
    }

    #[test]
    fn test_no_flags_is_initial_state() {
        assert_eq!(filter_state(&args()).unwrap(), FilterState::initial());
    }

    #[test]
    fn test_flags_build_state() {
        let mut a = args();
        a.category = Some("audio".to_string());
        a.max_price = Some(500);
        a.tag = vec!["wireless".to_string()];
        a.sort = Some("price-asc".to_string());

        let state = filter_state(&a).unwrap();
        assert_eq!(state.category, Some(Category::Audio));
        assert_eq!(state.price_range, Some(PriceRange::dollars(0, Some(500))));
        assert_eq!(state.tags, vec!["wireless".to_string()]);
        assert_eq!(state.sort_by, SortBy::PriceAsc);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut a = args();
        a.category = Some("gadgets".to_string());
        assert!(filter_state(&a).is_err());
    }

    #[test]
    fn test_huge_max_price_keeps_every_price() {
        let mut a = args();
        a.max_price = Some(100_000_000_000_000_000);

        let state = filter_state(&a).unwrap();
        let range = state.price_range.unwrap();
        assert_eq!(range.max_cents, Some(i64::MAX));
    }

    #[test]
    fn test_inverted_price_range_is_rejected() {
        let mut a = args();
        a.min_price = Some(500);
        a.max_price = Some(100);
        assert!(filter_state(&a).is_err());
    }
}
