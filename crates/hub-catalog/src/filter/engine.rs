//! Predicate evaluation and sorting for product listings.

use std::collections::BTreeSet;

use crate::catalog::Product;
use crate::filter::{FilterState, SortBy};
use crate::money::Money;

/// Apply every active filter in `state`, then sort.
///
/// Predicates are ANDed; the tag predicate matches any listed tag. Sorting
/// is stable, so ties keep input order. Works on owned products or on
/// references produced by [`crate::catalog::Catalog::products_by_ids`].
pub fn filter_products<P>(products: &[P], state: &FilterState) -> Vec<P>
where
    P: AsRef<Product> + Clone,
{
    let needle = state
        .search_query
        .as_deref()
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let mut filtered: Vec<P> = products
        .iter()
        .filter(|p| {
            let p: &Product = (*p).as_ref();
            state.category.map_or(true, |c| p.category == c)
                && state
                    .price_range
                    .map_or(true, |range| range.contains(&p.price.current))
                && state.min_rating.map_or(true, |min| p.rating >= min)
                && (state.tags.is_empty() || state.tags.iter().any(|t| p.has_tag(t)))
                && needle.as_deref().map_or(true, |q| matches_text(p, q))
        })
        .cloned()
        .collect();

    sort_products(&mut filtered, state.sort_by);
    filtered
}

fn matches_text(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.short_description.to_lowercase().contains(needle)
        || product
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

fn sort_products<P: AsRef<Product>>(products: &mut [P], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceAsc => products.sort_by_key(|p| p.as_ref().price.current.amount_cents),
        SortBy::PriceDesc => products.sort_by(|a, b| {
            let (a, b) = (a.as_ref(), b.as_ref());
            b.price.current.amount_cents.cmp(&a.price.current.amount_cents)
        }),
        SortBy::Rating => {
            products.sort_by(|a, b| b.as_ref().rating.total_cmp(&a.as_ref().rating))
        }
        SortBy::Newest => {
            products.sort_by(|a, b| b.as_ref().created_at.cmp(&a.as_ref().created_at))
        }
        SortBy::Popular => {
            products.sort_by(|a, b| b.as_ref().review_count.cmp(&a.as_ref().review_count))
        }
        SortBy::Unsorted => {}
    }
}

/// Every distinct tag across `products`, sorted.
pub fn all_tags<P: AsRef<Product>>(products: &[P]) -> Vec<String> {
    products
        .iter()
        .flat_map(|p| p.as_ref().tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Lowest and highest current price, or `[0, 0]` when empty.
pub fn price_span<P: AsRef<Product>>(products: &[P]) -> [Money; 2] {
    let mut prices = products.iter().map(|p| p.as_ref().price.current);
    let Some(first) = prices.next() else {
        return [Money::default(), Money::default()];
    };
    prices.fold([first, first], |[min, max], price| {
        [
            if price.amount_cents < min.amount_cents { price } else { min },
            if price.amount_cents > max.amount_cents { price } else { max },
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::filter::PriceRange;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_initial_state_sorts_by_reviews() {
        let catalog = catalog();
        let all: Vec<&Product> = catalog.products().iter().collect();
        let sorted = filter_products(&all, &FilterState::initial());

        assert_eq!(sorted.len(), all.len());
        assert!(sorted
            .windows(2)
            .all(|w| w[0].review_count >= w[1].review_count));
        assert_eq!(sorted[0].id.as_str(), "smartwatch-z2");
    }

    #[test]
    fn test_popular_ranks_phone_before_laptop() {
        let catalog = catalog();
        let all: Vec<&Product> = catalog.products().iter().collect();
        let sorted = ids(&filter_products(&all, &FilterState::initial()));
        let phone = sorted.iter().position(|id| id == "smartphone-x1").unwrap();
        let laptop = sorted.iter().position(|id| id == "laptop-pro").unwrap();
        assert!(phone < laptop);
    }

    #[test]
    fn test_category_and_price_are_anded() {
        let catalog = catalog();
        let state = FilterState::initial()
            .with_category(Category::HomeAppliances)
            .with_price_range(PriceRange::dollars(0, Some(500)));
        let result = filter_products(catalog.products(), &state);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "smart-coffee-maker");
    }

    #[test]
    fn test_tags_are_ored() {
        let catalog = catalog();
        let state = FilterState::initial().with_tag("RGB").with_tag("HEPA");
        let mut found: Vec<String> = filter_products(catalog.products(), &state)
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        found.sort();
        assert_eq!(found, vec!["air-purifier-max", "gaming-keyboard-rgb"]);
    }

    #[test]
    fn test_text_query_matches_tags_case_insensitive() {
        let catalog = catalog();
        let state = FilterState::initial().with_query("NOISE");
        let result = filter_products(catalog.products(), &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "wireless-headphones-ultra");
    }

    #[test]
    fn test_text_query_is_matched_untrimmed() {
        let catalog = catalog();
        let padded = FilterState::initial()
            .with_query("ultra ")
            .with_sort(SortBy::Unsorted);
        assert!(filter_products(catalog.products(), &padded).is_empty());

        let bare = FilterState::initial()
            .with_query("ultra")
            .with_sort(SortBy::Unsorted);
        assert!(!filter_products(catalog.products(), &bare).is_empty());
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let catalog = catalog();
        let state = FilterState::initial().with_sort(SortBy::Unsorted);
        let result = filter_products(catalog.products(), &state);
        assert_eq!(result, catalog.products().to_vec());
    }

    #[test]
    fn test_price_sorts() {
        let catalog = catalog();
        let asc = filter_products(
            catalog.products(),
            &FilterState::initial().with_sort(SortBy::PriceAsc),
        );
        assert!(asc
            .windows(2)
            .all(|w| w[0].price.current.amount_cents <= w[1].price.current.amount_cents));

        let desc = filter_products(
            catalog.products(),
            &FilterState::initial().with_sort(SortBy::PriceDesc),
        );
        assert_eq!(desc[0].id.as_str(), "laptop-pro");
    }

    #[test]
    fn test_newest_sort() {
        let catalog = catalog();
        let result = filter_products(
            catalog.products(),
            &FilterState::initial().with_sort(SortBy::Newest),
        );
        assert_eq!(result[0].id.as_str(), "smartphone-x1");
    }

    #[test]
    fn test_min_rating() {
        let catalog = catalog();
        let result = filter_products(
            catalog.products(),
            &FilterState::initial().with_min_rating(4.75),
        );
        assert!(result.iter().all(|p| p.rating >= 4.75));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Product> = vec![];
        assert!(filter_products(&empty, &FilterState::initial()).is_empty());
        assert!(all_tags(&empty).is_empty());
        assert_eq!(price_span(&empty), [Money::default(), Money::default()]);
    }

    #[test]
    fn test_all_tags_sorted_and_unique() {
        let catalog = catalog();
        let tags = all_tags(catalog.products());
        let mut expected = tags.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(tags, expected);
        assert_eq!(tags.iter().filter(|t| *t == "smart home").count(), 1);
    }

    #[test]
    fn test_price_span() {
        let catalog = catalog();
        let [min, max] = price_span(catalog.products());
        assert_eq!(min.amount_cents, 15_900);
        assert_eq!(max.amount_cents, 1_299_900);
    }
}
