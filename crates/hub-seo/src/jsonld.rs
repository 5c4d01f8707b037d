//! schema.org JSON-LD builders.
//!
//! Every builder takes the site settings so that URLs follow the configured
//! base URL and brand name.

use hub_catalog::catalog::{Article, Product};
use hub_core::SiteSettings;
use serde_json::{json, Value};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Brands recognized in product names, checked in order.
const KNOWN_BRANDS: [&str; 8] = [
    "iPhone", "Samsung", "MacBook", "Dell", "HP", "Lenovo", "Sony", "LG",
];

/// First known brand contained in `product_name` (case-insensitive), or "Generic".
pub fn extract_brand(product_name: &str) -> &'static str {
    let name = product_name.to_lowercase();
    KNOWN_BRANDS
        .iter()
        .find(|brand| name.contains(&brand.to_lowercase()))
        .copied()
        .unwrap_or("Generic")
}

/// Whitespace-separated word count.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// `Product` with offer, rating, an editorial review and feature properties.
pub fn product(product: &Product, site: &SiteSettings) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "name": product.name,
        "description": product.description,
        "image": product.images,
        "brand": {
            "@type": "Brand",
            "name": extract_brand(&product.name),
        },
        "offers": {
            "@type": "Offer",
            "price": product.price.current.display_amount(),
            "priceCurrency": product.price.current.currency.code(),
            "availability": "https://schema.org/InStock",
            "url": product.official_url,
            "seller": {
                "@type": "Organization",
                "name": site.name,
            },
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": product.rating,
            "reviewCount": product.review_count,
            "bestRating": 5,
            "worstRating": 1,
        },
        "review": [{
            "@type": "Review",
            "reviewRating": {
                "@type": "Rating",
                "ratingValue": product.rating,
                "bestRating": 5,
            },
            "author": {
                "@type": "Person",
                "name": format!("{} Expert Review", site.name),
            },
            "reviewBody": format!("Professional review of {}. {}", product.name, product.short_description),
            "publisher": {
                "@type": "Organization",
                "name": site.name,
            },
        }],
        "additionalProperty": product.features.iter().map(|feature| json!({
            "@type": "PropertyValue",
            "name": "Feature",
            "value": feature,
        })).collect::<Vec<_>>(),
        "category": product.category.as_str(),
        "sku": product.id.as_str(),
        "url": site.url(&format!("/products/{}", product.slug)),
    })
}

/// `Article` with author, publisher and word count.
pub fn article(article: &Article, site: &SiteSettings) -> Value {
    let url = site.url(&format!("/blog/{}", article.slug));
    let author_url = article
        .author
        .bio
        .clone()
        .unwrap_or_else(|| site.url("/about"));

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": article.title,
        "description": article.excerpt,
        "image": article.featured_image.clone().unwrap_or_else(|| "/og-image.jpg".to_string()),
        "author": {
            "@type": "Person",
            "name": article.author.name,
            "url": author_url,
        },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "logo": {
                "@type": "ImageObject",
                "url": site.url("/logo.png"),
            },
        },
        "datePublished": article.published_at.to_rfc3339(),
        "dateModified": article.updated_at.to_rfc3339(),
        "articleSection": article.category.as_str(),
        "keywords": article.tags.join(", "),
        "wordCount": word_count(&article.content),
        "url": url,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
    })
}

/// The publishing organization.
pub fn organization(site: &SiteSettings) -> Value {
    let handle = site.name.replace(' ', "");
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": site.name,
        "url": site.url("/"),
        "logo": site.url("/logo.png"),
        "description": "Professional product review and promotion platform",
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "US",
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "customer service",
            "email": format!("contact@{}", host_of(&site.base_url)),
        },
        "sameAs": [
            format!("https://twitter.com/{}", handle),
            format!("https://facebook.com/{}", handle),
            format!("https://linkedin.com/company/{}", handle),
        ],
    })
}

/// Main navigation links.
pub fn site_navigation(site: &SiteSettings) -> Value {
    let part = |name: &str, path: &str| {
        json!({
            "@type": "SiteNavigationElement",
            "name": name,
            "url": site.url(path),
        })
    };

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "SiteNavigationElement",
        "name": "Main Navigation",
        "url": site.url("/"),
        "hasPart": [
            part("Product Reviews", "/products"),
            part("Blog", "/blog"),
            part("Compare", "/compare"),
            part("About", "/about"),
        ],
    })
}

/// `WebSite` with a sitelinks search box action.
pub fn search_action(site: &SiteSettings) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "url": site.url("/"),
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{}?q={{search_term_string}}", site.url("/search")),
            },
            "query-input": "required name=search_term_string",
        },
    })
}

/// Wrap structured data in a `<script type="application/ld+json">` tag.
///
/// `</` is escaped so the payload cannot close the script element.
pub fn script_tag(data: &Value) -> String {
    let body = data.to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{}</script>"#, body)
}

fn host_of(base_url: &str) -> &str {
    let without_scheme = base_url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(base_url);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}
