use hub_catalog::catalog::DEFAULT_FEATURED_ARTICLES;
use hub_core::RequestContext;
use hub_seo::{jsonld, PageMetadata};
use serde::Serialize;

use crate::storefront::Storefront;
use crate::views::{ArticleCard, ProductCard, SiteView};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub site: SiteView,
    pub meta: PageMetadata,
    pub products: Vec<ProductCard>,
    pub featured_articles: Vec<ArticleCard>,
}

impl Storefront {
    /// Home page: the domain's products and the newest articles.
    pub fn home(&self, ctx: &RequestContext) -> HomePage {
        let mut scope = self.scope(ctx, "home");
        let settings = self.settings();

        let products: Vec<ProductCard> = self
            .visible_products(&ctx.host)
            .into_iter()
            .map(|p| ProductCard::new(p, self.images()))
            .collect();

        let featured_articles: Vec<ArticleCard> = self
            .catalog()
            .featured_articles(DEFAULT_FEATURED_ARTICLES)
            .into_iter()
            .map(|a| ArticleCard::new(a, self.images()))
            .collect();

        scope.data_ready();

        let meta = PageMetadata::for_domain(settings, self.domain(&ctx.host))
            .with_structured_data(jsonld::organization(settings))
            .with_structured_data(jsonld::site_navigation(settings))
            .with_structured_data(jsonld::search_action(settings));

        scope.rendered(products.len());
        HomePage {
            site: self.site_view(&ctx.host),
            meta,
            products,
            featured_articles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::SiteSettings;

    #[test]
    fn test_home_for_tech_reviews() {
        let store = Storefront::bundled(SiteSettings::default()).unwrap();
        let page = store.home(&RequestContext::new("tech-reviews.com", "/"));

        let slugs: Vec<&str> = page.products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["smartphone-x1-pro", "laptopro-16"]);
        assert_eq!(page.featured_articles.len(), 3);
        assert_eq!(page.featured_articles[0].slug, "iphone-15-pro-review");
        assert_eq!(page.meta.structured_data.len(), 3);
        assert_eq!(page.site.title, "Tech Reviews - Latest Technology Product Reviews");
    }

    #[test]
    fn test_home_for_unknown_host() {
        let store = Storefront::bundled(SiteSettings::default()).unwrap();
        let page = store.home(&RequestContext::new("nowhere.example", "/"));

        assert!(page.products.is_empty());
        assert_eq!(page.featured_articles.len(), 3);
        assert_eq!(page.site.title, "ProductHub");
        assert_eq!(page.meta.title, "ProductHub - Professional Product Reviews");
    }
}
