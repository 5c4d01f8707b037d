//! Page metadata and `<head>` rendering.

use hub_catalog::catalog::{Article, Product};
use hub_core::SiteSettings;
use hub_sites::DomainConfig;
use serde::Serialize;
use serde_json::Value;

use crate::escape::escape_markup;
use crate::jsonld;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
const DEFAULT_OG_IMAGE: &str = "/og-image.jpg";

/// An Open Graph image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl OgImage {
    /// Image at the standard 1200x630 share size.
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: OG_IMAGE_WIDTH,
            height: OG_IMAGE_HEIGHT,
            alt: alt.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    /// `website` or `article`.
    pub kind: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Everything a page contributes to its `<head>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// JSON-LD blocks rendered as script tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub structured_data: Vec<Value>,
}

impl PageMetadata {
    /// Metadata for a generic page.
    ///
    /// The canonical URL defaults to the site base URL; images default to
    /// the site share image.
    pub fn new(
        site: &SiteSettings,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let description = description.into();
        let canonical = site.url("/");
        let image = OgImage::new(DEFAULT_OG_IMAGE, title.clone());

        Self {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                url: canonical.clone(),
                site_name: site.name.clone(),
                kind: "website".to_string(),
                images: vec![image.clone()],
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: title.clone(),
                description: description.clone(),
                images: vec![image.url],
            },
            title,
            description,
            keywords: Vec::new(),
            canonical,
            structured_data: Vec::new(),
        }
    }

    /// Metadata from a domain's SEO defaults.
    pub fn for_domain(site: &SiteSettings, domain: &DomainConfig) -> Self {
        Self::new(site, &domain.seo.title, &domain.seo.description)
            .with_keywords(domain.seo.keywords.clone())
    }

    /// Product page metadata with Product JSON-LD.
    pub fn for_product(site: &SiteSettings, product: &Product) -> Self {
        let mut keywords = product.tags.clone();
        keywords.push(product.category.display_name().to_string());

        let images: Vec<OgImage> = product
            .images
            .iter()
            .map(|url| OgImage::new(url, &product.name))
            .collect();

        Self::new(site, product.page_title(), product.page_description())
            .with_keywords(keywords)
            .with_path(site, &format!("/products/{}", product.slug))
            .with_images(images)
            .with_structured_data(jsonld::product(product, site))
    }

    /// Article page metadata with Article JSON-LD.
    pub fn for_article(site: &SiteSettings, article: &Article) -> Self {
        let mut meta = Self::new(site, article.page_title(), article.page_description())
            .with_keywords(article.tags.clone())
            .with_path(site, &format!("/blog/{}", article.slug))
            .with_structured_data(jsonld::article(article, site));

        if let Some(image) = &article.featured_image {
            meta = meta.with_images(vec![OgImage::new(image, &article.title)]);
        }
        meta.open_graph.kind = "article".to_string();
        meta
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Point the canonical and Open Graph URL at `path` under the base URL.
    pub fn with_path(mut self, site: &SiteSettings, path: &str) -> Self {
        self.canonical = site.url(path);
        self.open_graph.url = self.canonical.clone();
        self
    }

    /// Replace share images. An empty list keeps the current images.
    pub fn with_images(mut self, images: Vec<OgImage>) -> Self {
        if images.is_empty() {
            return self;
        }
        self.twitter.images = images.iter().map(|i| i.url.clone()).collect();
        self.open_graph.images = images;
        self
    }

    pub fn with_structured_data(mut self, data: Value) -> Self {
        self.structured_data.push(data);
        self
    }

    /// Keywords joined for the `keywords` meta tag.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }

    /// Convert to renderable head content.
    pub fn to_head(&self) -> HeadContent {
        let og = &self.open_graph;
        let mut head = HeadContent::new(&self.title)
            .with_meta("description", &self.description)
            .with_canonical(&self.canonical)
            .with_property("og:title", &og.title)
            .with_property("og:description", &og.description)
            .with_property("og:url", &og.url)
            .with_property("og:site_name", &og.site_name)
            .with_property("og:type", &og.kind);

        if !self.keywords.is_empty() {
            head = head.with_meta("keywords", &self.keywords_content());
        }

        for image in &og.images {
            head = head
                .with_property("og:image", &image.url)
                .with_property("og:image:width", &image.width.to_string())
                .with_property("og:image:height", &image.height.to_string())
                .with_property("og:image:alt", &image.alt);
        }

        head = head
            .with_meta("twitter:card", &self.twitter.card)
            .with_meta("twitter:title", &self.twitter.title)
            .with_meta("twitter:description", &self.twitter.description);
        for image in &self.twitter.images {
            head = head.with_meta("twitter:image", image);
        }

        for data in &self.structured_data {
            head = head.with_json_ld(data);
        }
        head
    }
}

/// Head section content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// `<meta name=..>` tags.
    pub meta: Vec<(String, String)>,
    /// `<meta property=..>` tags (Open Graph).
    pub properties: Vec<(String, String)>,
    /// Pre-rendered link tags.
    pub links: Vec<String>,
    /// Pre-rendered script tags.
    pub scripts: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a meta property tag.
    pub fn with_property(mut self, property: &str, content: &str) -> Self {
        self.properties
            .push((property.to_string(), content.to_string()));
        self
    }

    /// Add a canonical link.
    pub fn with_canonical(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            escape_markup(href)
        ));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            escape_markup(href)
        ));
        self
    }

    /// Add a JSON-LD script.
    pub fn with_json_ld(mut self, data: &Value) -> Self {
        self.scripts.push(jsonld::script_tag(data));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_markup(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_markup(name),
                escape_markup(content)
            ));
            html.push('\n');
        }

        for (property, content) in &self.properties {
            html.push_str(&format!(
                r#"<meta property="{}" content="{}">"#,
                escape_markup(property),
                escape_markup(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        for script in &self.scripts {
            html.push_str(script);
            html.push('\n');
        }

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_catalog::catalog::Catalog;
    use hub_sites::DomainResolver;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_head_content_render() {
        let head = HeadContent::new("Test Page")
            .with_meta("description", "A test page")
            .with_property("og:type", "website")
            .with_stylesheet("/styles.css");

        let html = head.render();
        assert_eq!(
            html,
            "<title>Test Page</title>\n\
             <meta name=\"description\" content=\"A test page\">\n\
             <meta property=\"og:type\" content=\"website\">\n\
             <link rel=\"stylesheet\" href=\"/styles.css\">\n"
        );
    }

    #[test]
    fn test_render_escapes_values() {
        let html = HeadContent::new("Tom & Jerry <3")
            .with_meta("description", r#"say "hi""#)
            .render();
        assert!(html.contains("<title>Tom &amp; Jerry &lt;3</title>"));
        assert!(html.contains("content=\"say &quot;hi&quot;\""));
    }

    #[test]
    fn test_domain_metadata() {
        let site = SiteSettings::default();
        let resolver = DomainResolver::bundled().unwrap();
        let domain = resolver.resolve_or_default("unknown.example");
        let meta = PageMetadata::for_domain(&site, domain);

        assert_eq!(meta.title, "ProductHub - Professional Product Reviews");
        assert_eq!(
            meta.keywords_content(),
            "product reviews, product recommendations, buying guide, product comparison"
        );
        assert_eq!(meta.canonical, "https://producthub.com");
        assert_eq!(meta.open_graph.images[0].width, 1200);
        assert_eq!(meta.open_graph.images[0].height, 630);
        assert_eq!(meta.open_graph.images[0].alt, meta.title);
        assert_eq!(meta.twitter.card, "summary_large_image");
    }

    #[test]
    fn test_product_metadata() {
        let catalog = Catalog::bundled().unwrap();
        let site = SiteSettings::default();
        let product = catalog.product_by_slug("laptopro-16").unwrap();
        let meta = PageMetadata::for_product(&site, product);

        assert_eq!(meta.canonical, "https://producthub.com/products/laptopro-16");
        assert_eq!(meta.open_graph.images.len(), product.images.len());
        assert_eq!(meta.structured_data.len(), 1);
        assert!(meta.keywords.contains(&"Laptops".to_string()));

        let html = meta.to_head().render();
        assert!(html.contains(r#"<link rel="canonical" href="https://producthub.com/products/laptopro-16">"#));
        assert!(html.contains(r#"<script type="application/ld+json">"#));
        assert!(html.contains(r#"<meta property="og:image:width" content="1200">"#));
    }

    #[test]
    fn test_article_metadata_is_article_type() {
        let catalog = Catalog::bundled().unwrap();
        let site = SiteSettings::default();
        let article = catalog.article_by_slug("iphone-15-pro-review").unwrap();
        let meta = PageMetadata::for_article(&site, article);

        assert_eq!(meta.open_graph.kind, "article");
        assert_eq!(
            meta.open_graph.images[0].url,
            article.featured_image.clone().unwrap()
        );
        assert_eq!(meta.twitter.images, vec![meta.open_graph.images[0].url.clone()]);
    }
}
