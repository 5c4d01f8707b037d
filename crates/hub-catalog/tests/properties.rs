use hub_catalog::prelude::*;
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::bundled().expect("bundled catalog")
}

fn known_tags() -> Vec<String> {
    all_tags(catalog().products())
}

#[test]
fn id_and_slug_lookups_agree() {
    let catalog = catalog();
    for product in catalog.products() {
        let by_id = catalog.product_by_id(product.id.as_str()).unwrap();
        assert_eq!(catalog.product_by_slug(&by_id.slug), Some(by_id));
    }
    for article in catalog.articles() {
        let by_id = catalog.article_by_id(article.id.as_str()).unwrap();
        assert_eq!(catalog.article_by_slug(&by_id.slug), Some(by_id));
    }
}

#[test]
fn products_by_ids_drops_unknown() {
    let catalog = catalog();
    let found = catalog.products_by_ids(&[
        ProductId::new("smartphone-x1"),
        ProductId::new("nonexistent-id"),
    ]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slug, "smartphone-x1-pro");
}

#[test]
fn featured_articles_are_newest_first() {
    let catalog = catalog();
    let featured = catalog.featured_articles(DEFAULT_FEATURED_ARTICLES);
    assert_eq!(featured.len(), 3);
    assert!(featured
        .windows(2)
        .all(|w| w[0].published_at >= w[1].published_at));
    assert_eq!(featured[0].slug, "iphone-15-pro-review");
    assert_eq!(catalog.recent_articles(DEFAULT_RECENT_ARTICLES).len(), 6);
}

#[test]
fn articles_by_tag_and_category() {
    let catalog = catalog();
    let apple = catalog.articles_by_tag("Apple");
    assert_eq!(apple.len(), 3);
    assert!(catalog.articles_by_tag("apple").is_empty());

    let gaming = catalog.articles_by_category(Category::Gaming);
    assert_eq!(gaming.len(), 1);
    assert_eq!(catalog.products_by_category(Category::Laptops).len(), 2);
}

#[test]
fn query_string_drives_filtering() {
    let catalog = catalog();
    let state = FilterState::from_query_string("category=laptops&sort=price-asc");
    let listed = filter_products(catalog.products(), &state);
    let slugs: Vec<&str> = listed.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["tabletpro-12-creative", "laptopro-16"]);
}

proptest! {
    #[test]
    fn price_range_results_respect_bounds(
        min in 0i64..2_000_000,
        span in 0i64..2_000_000,
        unbounded in any::<bool>(),
    ) {
        let catalog = catalog();
        let range = PriceRange::new(min, if unbounded { None } else { Some(min + span) });
        let state = FilterState::initial().with_price_range(range);

        for product in filter_products(catalog.products(), &state) {
            let cents = product.price.current.amount_cents;
            prop_assert!(cents >= range.min_cents);
            if let Some(max) = range.max_cents {
                prop_assert!(cents <= max);
            }
        }
    }

    #[test]
    fn tag_filter_is_any_of(picks in proptest::sample::subsequence(known_tags(), 1..4)) {
        let catalog = catalog();
        let state = picks
            .iter()
            .fold(FilterState::initial(), |s, t| s.with_tag(t.clone()));
        let listed = filter_products(catalog.products(), &state);

        let expected = catalog
            .products()
            .iter()
            .filter(|p| picks.iter().any(|t| p.tags.contains(t)))
            .count();
        prop_assert_eq!(listed.len(), expected);
    }

    #[test]
    fn search_never_returns_zero_scores(query in "[a-zA-Z ]{0,12}") {
        let catalog = catalog();
        let results = search(
            catalog.products(),
            catalog.articles(),
            &query,
            SearchOptions::default(),
        )
        .unwrap();

        prop_assert!(results.len() <= 20);
        prop_assert!(results.iter().all(|r| r.score > 0));
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        if query.trim().is_empty() {
            prop_assert!(results.is_empty());
        }
    }

    #[test]
    fn overlong_queries_are_rejected(extra in 1usize..50) {
        let catalog = catalog();
        let query = "a".repeat(MAX_QUERY_LEN + extra);
        let is_too_long = matches!(
            search(catalog.products(), catalog.articles(), &query, SearchOptions::default()),
            Err(SearchError::QueryTooLong { .. })
        );
        prop_assert!(is_too_long);
    }

    #[test]
    fn sort_is_a_permutation(sort in prop_oneof![
        Just("price-asc"), Just("price-desc"), Just("rating"),
        Just("newest"), Just("popular"), Just("bogus"),
    ]) {
        let catalog = catalog();
        let state = FilterState::initial().with_sort(SortBy::from_str(sort));
        let mut listed: Vec<String> = filter_products(catalog.products(), &state)
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        let mut all: Vec<String> = catalog.products().iter().map(|p| p.id.to_string()).collect();
        listed.sort();
        all.sort();
        prop_assert_eq!(listed, all);
    }
}
