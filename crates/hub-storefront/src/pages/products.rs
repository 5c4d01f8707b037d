use hub_catalog::catalog::{Category, Product};
use hub_catalog::filter::{all_tags, filter_products, price_span, FilterState, PricePreset, PRICE_RANGES};
use hub_catalog::Money;
use hub_core::RequestContext;
use hub_seo::PageMetadata;
use serde::Serialize;
use serde_json::Value;

use crate::storefront::Storefront;
use crate::views::{ArticleCard, ProductCard, ProductView, SiteView};

/// Related items shown under a product.
const RELATED_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListingPage {
    pub site: SiteView,
    pub meta: PageMetadata,
    pub filters: FilterState,
    pub has_filters: bool,
    /// Query string reproducing `filters`.
    pub query_string: String,
    pub cache_key: String,
    pub products: Vec<ProductCard>,
    /// Products on the domain before filtering.
    pub total: usize,
    /// Categories present on the domain, in catalog order.
    pub categories: Vec<Category>,
    pub available_tags: Vec<String>,
    /// Lowest and highest current price on the domain.
    pub price_span: [Money; 2],
    pub price_presets: Vec<PricePreset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailPage {
    pub site: SiteView,
    pub meta: PageMetadata,
    pub product: ProductView,
    pub discount_percent: u32,
    pub json_ld: Value,
    pub related_products: Vec<ProductCard>,
    pub related_articles: Vec<ArticleCard>,
}

impl Storefront {
    /// Product listing for the domain, narrowed by `filters`.
    pub fn product_listing(&self, ctx: &RequestContext, filters: FilterState) -> ProductListingPage {
        let mut scope = self.scope(ctx, "product_listing");
        let visible = self.visible_products(&ctx.host);

        let products: Vec<ProductCard> = filter_products(&visible, &filters)
            .into_iter()
            .map(|p| ProductCard::new(p, self.images()))
            .collect();

        let mut categories: Vec<Category> = Vec::new();
        for product in &visible {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }

        scope.data_ready();

        let domain = self.domain(&ctx.host);
        let meta = PageMetadata::for_domain(self.settings(), domain)
            .with_path(self.settings(), "/products");

        scope.rendered(products.len());
        ProductListingPage {
            site: self.site_view(&ctx.host),
            meta,
            has_filters: filters.has_filters(),
            query_string: filters.to_query_string(),
            cache_key: filters.cache_key(),
            filters,
            products,
            total: visible.len(),
            categories,
            available_tags: all_tags(&visible),
            price_span: price_span(&visible),
            price_presets: PRICE_RANGES.to_vec(),
        }
    }

    /// Listing page driven by the request's query string.
    pub fn product_listing_from_query(&self, ctx: &RequestContext) -> ProductListingPage {
        self.product_listing(ctx, FilterState::from_query_string(&ctx.raw_query))
    }

    /// Product detail by slug.
    ///
    /// Any catalog product can be opened by slug; related products are
    /// limited to the domain's visible set.
    pub fn product_detail(&self, ctx: &RequestContext, slug: &str) -> Option<ProductDetailPage> {
        let mut scope = self.scope(ctx, "product_detail");
        let Some(product) = self.catalog().product_by_slug(slug) else {
            scope.not_found(slug);
            return None;
        };

        let related_products: Vec<ProductCard> = self
            .related_products(&ctx.host, product)
            .into_iter()
            .map(|p| ProductCard::new(p, self.images()))
            .collect();

        let related_articles: Vec<ArticleCard> = self
            .catalog()
            .articles_for_product(product, RELATED_LIMIT)
            .into_iter()
            .map(|a| ArticleCard::new(a, self.images()))
            .collect();

        scope.data_ready();

        let meta = PageMetadata::for_product(self.settings(), product);
        let json_ld = meta.structured_data.first().cloned().unwrap_or(Value::Null);

        scope.rendered(1 + related_products.len());
        Some(ProductDetailPage {
            site: self.site_view(&ctx.host),
            meta,
            product: ProductView::new(product, self.images()),
            discount_percent: product.price.discount_percent(),
            json_ld,
            related_products,
            related_articles,
        })
    }

    /// Same-category products visible on `host`, excluding `product`.
    fn related_products(&self, host: &str, product: &Product) -> Vec<&Product> {
        self.visible_products(host)
            .into_iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(RELATED_LIMIT)
            .collect()
    }
}
