//! Filter state and its query-string form.

use hub_core::{parse_query_string, url_encode};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::money::{Currency, Money};

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
    /// Most recently created first.
    Newest,
    /// Most reviewed first.
    #[default]
    Popular,
    /// No sort pass; filtered order is kept.
    Unsorted,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
            SortBy::Rating => "rating",
            SortBy::Newest => "newest",
            SortBy::Popular => "popular",
            SortBy::Unsorted => "none",
        }
    }

    /// Parse a sort key. Unrecognized keys mean [`SortBy::Unsorted`].
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "price-asc" => SortBy::PriceAsc,
            "price-desc" => SortBy::PriceDesc,
            "rating" => SortBy::Rating,
            "newest" => SortBy::Newest,
            "popular" => SortBy::Popular,
            _ => SortBy::Unsorted,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::PriceAsc => "Price: Low to High",
            SortBy::PriceDesc => "Price: High to Low",
            SortBy::Rating => "Highest Rated",
            SortBy::Newest => "Newest",
            SortBy::Popular => "Most Popular",
            SortBy::Unsorted => "Default",
        }
    }
}

/// Inclusive price bounds in cents. `max_cents: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cents: Option<i64>,
}

impl PriceRange {
    pub fn new(min_cents: i64, max_cents: Option<i64>) -> Self {
        Self {
            min_cents,
            max_cents,
        }
    }

    /// Bounds given in whole dollars. Cents saturate at the `i64` limits.
    pub fn dollars(min: i64, max: Option<i64>) -> Self {
        Self::new(min.saturating_mul(100), max.map(|m| m.saturating_mul(100)))
    }

    /// Check `min <= price <= max`.
    pub fn contains(&self, price: &Money) -> bool {
        price.amount_cents >= self.min_cents
            && self.max_cents.map_or(true, |max| price.amount_cents <= max)
    }
}

/// A named price range offered in the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

/// Preset price ranges.
pub const PRICE_RANGES: [PricePreset; 6] = [
    PricePreset {
        label: "Under $500",
        range: PriceRange { min_cents: 0, max_cents: Some(50_000) },
    },
    PricePreset {
        label: "$500 - $1000",
        range: PriceRange { min_cents: 50_000, max_cents: Some(100_000) },
    },
    PricePreset {
        label: "$1000 - $3000",
        range: PriceRange { min_cents: 100_000, max_cents: Some(300_000) },
    },
    PricePreset {
        label: "$3000 - $5000",
        range: PriceRange { min_cents: 300_000, max_cents: Some(500_000) },
    },
    PricePreset {
        label: "$5000 - $10000",
        range: PriceRange { min_cents: 500_000, max_cents: Some(1_000_000) },
    },
    PricePreset {
        label: "Over $10000",
        range: PriceRange { min_cents: 1_000_000, max_cents: None },
    },
];

/// Active listing filters for one browsing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    /// Match any of these tags.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl FilterState {
    /// No filters, sorted by popularity.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Set the text query; blank queries clear it.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.search_query = if q.trim().is_empty() { None } else { Some(q) };
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort_by = sort;
        self
    }

    /// Check whether any predicate is active (sorting aside).
    pub fn has_filters(&self) -> bool {
        self.category.is_some()
            || self.price_range.is_some()
            || self.min_rating.is_some()
            || !self.tags.is_empty()
            || self.search_query.is_some()
    }

    /// Parse listing filters from a URL query string.
    ///
    /// Keys: `category`, `min_price`/`max_price` (dollars), `rating`,
    /// `tags` (comma separated), `q`, `sort`. Unknown keys and malformed
    /// values are ignored.
    pub fn from_query_string(qs: &str) -> Self {
        let params = parse_query_string(qs.trim_start_matches('?'));
        let mut state = Self::initial();

        if let Some(category) = params.get("category").and_then(|c| Category::from_str(c)) {
            state.category = Some(category);
        }

        let min_price = params.get("min_price").and_then(|v| parse_dollars(v));
        let max_price = params.get("max_price").and_then(|v| parse_dollars(v));
        if min_price.is_some() || max_price.is_some() {
            state.price_range = Some(PriceRange::new(min_price.unwrap_or(0), max_price));
        }

        state.min_rating = params
            .get("rating")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|r| r.is_finite());

        if let Some(tags) = params.get("tags") {
            for tag in tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                state = state.with_tag(tag);
            }
        }

        if let Some(q) = params.get("q") {
            state = state.with_query(q.as_str());
        }

        if let Some(sort) = params.get("sort") {
            state.sort_by = SortBy::from_str(sort);
        }

        state
    }

    /// Render as a query string (without the leading `?`).
    ///
    /// The default sort is omitted.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if let Some(category) = self.category {
            pairs.push(format!("category={}", category.as_str()));
        }
        if let Some(range) = self.price_range {
            pairs.push(format!("min_price={}", format_dollars(range.min_cents)));
            if let Some(max) = range.max_cents {
                pairs.push(format!("max_price={}", format_dollars(max)));
            }
        }
        if let Some(rating) = self.min_rating {
            pairs.push(format!("rating={}", rating));
        }
        if !self.tags.is_empty() {
            pairs.push(format!("tags={}", url_encode(&self.tags.join(","))));
        }
        if let Some(q) = &self.search_query {
            pairs.push(format!("q={}", url_encode(q)));
        }
        if self.sort_by != SortBy::default() {
            pairs.push(format!("sort={}", self.sort_by.as_str()));
        }

        pairs.join("&")
    }

    /// Key identifying the listing this state produces.
    pub fn cache_key(&self) -> String {
        let mut tags = self.tags.clone();
        tags.sort();
        format!(
            "products:{}:{}:{}:{}:{}:{}",
            self.category.map(|c| c.as_str()).unwrap_or("all"),
            self.price_range
                .map(|r| format!(
                    "{}-{}",
                    r.min_cents,
                    r.max_cents.map(|m| m.to_string()).unwrap_or_else(|| "inf".to_string())
                ))
                .unwrap_or_else(|| "any".to_string()),
            self.min_rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| "0".to_string()),
            if tags.is_empty() {
                "none".to_string()
            } else {
                tags.join(",").to_lowercase().replace(' ', "_")
            },
            self.search_query
                .as_deref()
                .map(|q| q.trim().to_lowercase().replace(' ', "_"))
                .unwrap_or_default(),
            self.sort_by.as_str()
        )
    }
}

fn parse_dollars(value: &str) -> Option<i64> {
    let amount = value.trim().parse::<f64>().ok()?;
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some(Money::from_decimal(amount, Currency::USD).amount_cents)
}

fn format_dollars(cents: i64) -> String {
    if cents % 100 == 0 {
        (cents / 100).to_string()
    } else {
        format!("{:.2}", cents as f64 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state() {
        let state = FilterState::initial();
        assert!(state.tags.is_empty());
        assert_eq!(state.sort_by, SortBy::Popular);
        assert!(!state.has_filters());
    }

    #[test]
    fn test_from_query_string() {
        let state = FilterState::from_query_string(
            "category=audio&min_price=100&max_price=500&rating=4&tags=a,b&q=x&sort=price-asc",
        );

        assert_eq!(
            state,
            FilterState {
                category: Some(Category::Audio),
                price_range: Some(PriceRange::dollars(100, Some(500))),
                min_rating: Some(4.0),
                tags: vec!["a".to_string(), "b".to_string()],
                search_query: Some("x".to_string()),
                sort_by: SortBy::PriceAsc,
            }
        );
    }

    #[test]
    fn test_malformed_values_ignored() {
        let state = FilterState::from_query_string("category=toasters&min_price=abc&rating=high&foo=bar");
        assert_eq!(state, FilterState::initial());
    }

    #[test]
    fn test_unknown_sort_is_unsorted() {
        let state = FilterState::from_query_string("sort=alphabetical");
        assert_eq!(state.sort_by, SortBy::Unsorted);
    }

    #[test]
    fn test_only_max_price_starts_at_zero() {
        let state = FilterState::from_query_string("max_price=299.99");
        assert_eq!(state.price_range, Some(PriceRange::new(0, Some(29_999))));
    }

    #[test]
    fn test_query_string_round_trip() {
        let state = FilterState::initial()
            .with_category(Category::HomeAppliances)
            .with_price_range(PriceRange::dollars(1000, None))
            .with_tag("smart home")
            .with_query("coffee & tea")
            .with_sort(SortBy::Rating);

        let qs = state.to_query_string();
        assert_eq!(FilterState::from_query_string(&qs), state);
    }

    #[test]
    fn test_default_sort_omitted() {
        assert_eq!(FilterState::initial().to_query_string(), "");
    }

    #[test]
    fn test_cache_key_ignores_tag_order() {
        let a = FilterState::initial().with_tag("RGB").with_tag("gaming keyboard");
        let b = FilterState::initial().with_tag("gaming keyboard").with_tag("RGB");
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(
            FilterState::initial().cache_key(),
            "products:all:any:0:none::popular"
        );
    }

    #[test]
    fn test_price_range_contains_is_inclusive() {
        let range = PriceRange::dollars(100, Some(500));
        assert!(range.contains(&Money::usd(10_000)));
        assert!(range.contains(&Money::usd(50_000)));
        assert!(!range.contains(&Money::usd(50_001)));
        assert!(PriceRange::dollars(100, None).contains(&Money::usd(i64::MAX)));
    }

    #[test]
    fn test_huge_dollar_bounds_saturate() {
        let range = PriceRange::dollars(0, Some(100_000_000_000_000_000));
        assert_eq!(range.max_cents, Some(i64::MAX));
        assert!(range.contains(&Money::usd(1_299_900)));

        let floor = PriceRange::dollars(i64::MIN, None);
        assert_eq!(floor.min_cents, i64::MIN);
    }

    #[test]
    fn test_presets_are_contiguous() {
        for pair in PRICE_RANGES.windows(2) {
            assert_eq!(pair[0].range.max_cents, Some(pair[1].range.min_cents));
        }
        assert_eq!(PRICE_RANGES[5].range.max_cents, None);
    }
}
