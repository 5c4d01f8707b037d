use hub_catalog::catalog::{Article, Product, DEFAULT_FEATURED_ARTICLES};
use hub_core::RequestContext;
use hub_seo::PageMetadata;
use serde::Serialize;
use serde_json::Value;

use crate::storefront::Storefront;
use crate::views::{ArticleCard, ArticleView, ProductCard, SiteView};

const RELATED_PRODUCTS_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogIndexPage {
    pub site: SiteView,
    pub meta: PageMetadata,
    /// Newest first.
    pub articles: Vec<ArticleCard>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetailPage {
    pub site: SiteView,
    pub meta: PageMetadata,
    pub article: ArticleView,
    pub json_ld: Value,
    pub related_products: Vec<ProductCard>,
    /// Other recent articles.
    pub related_articles: Vec<ArticleCard>,
}

impl Storefront {
    /// Every article, newest first, with the tags in use.
    pub fn blog_index(&self, ctx: &RequestContext) -> BlogIndexPage {
        let mut scope = self.scope(ctx, "blog_index");
        let catalog = self.catalog();

        let articles: Vec<ArticleCard> = catalog
            .recent_articles(catalog.articles().len())
            .into_iter()
            .map(|a| ArticleCard::new(a, self.images()))
            .collect();

        let mut tags: Vec<String> = catalog
            .articles()
            .iter()
            .flat_map(|a| a.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();

        scope.data_ready();

        let meta = PageMetadata::new(
            self.settings(),
            format!("Blog - {}", self.site_view(&ctx.host).title),
            "Product reviews, buying guides and tutorials",
        )
        .with_path(self.settings(), "/blog");

        scope.rendered(articles.len());
        BlogIndexPage {
            site: self.site_view(&ctx.host),
            meta,
            articles,
            tags,
        }
    }

    /// Article by slug, with related products and other recent articles.
    pub fn article_detail(&self, ctx: &RequestContext, slug: &str) -> Option<ArticleDetailPage> {
        let mut scope = self.scope(ctx, "article_detail");
        let Some(article) = self.catalog().article_by_slug(slug) else {
            scope.not_found(slug);
            return None;
        };

        let related_articles: Vec<ArticleCard> = self
            .catalog()
            .recent_articles(DEFAULT_FEATURED_ARTICLES)
            .into_iter()
            .filter(|a| a.id != article.id)
            .map(|a| ArticleCard::new(a, self.images()))
            .collect();

        let related_products: Vec<ProductCard> = self
            .article_products(&ctx.host, article)
            .into_iter()
            .map(|p| ProductCard::new(p, self.images()))
            .collect();

        scope.data_ready();

        let meta = PageMetadata::for_article(self.settings(), article);
        let json_ld = meta.structured_data.first().cloned().unwrap_or(Value::Null);

        scope.rendered(1 + related_products.len());
        Some(ArticleDetailPage {
            site: self.site_view(&ctx.host),
            meta,
            article: ArticleView::new(article, self.images()),
            json_ld,
            related_products,
            related_articles,
        })
    }

    /// Products an article links to; when it lists none, the domain's
    /// products in the article's category.
    fn article_products(&self, host: &str, article: &Article) -> Vec<&Product> {
        if !article.related_products.is_empty() {
            return self.catalog().products_by_ids(&article.related_products);
        }
        self.visible_products(host)
            .into_iter()
            .filter(|p| p.category == article.category)
            .take(RELATED_PRODUCTS_LIMIT)
            .collect()
    }
}
