//! XML sitemap.

use chrono::{DateTime, SecondsFormat, Utc};
use hub_catalog::catalog::{Article, Product};
use hub_core::SiteSettings;
use serde::Serialize;

use crate::escape::escape_markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Static pages as (path, priority, frequency).
const STATIC_PAGES: [(&str, f32, ChangeFrequency); 6] = [
    ("/", 1.0, ChangeFrequency::Daily),
    ("/products", 0.9, ChangeFrequency::Daily),
    ("/blog", 0.8, ChangeFrequency::Daily),
    ("/search", 0.7, ChangeFrequency::Weekly),
    ("/compare", 0.6, ChangeFrequency::Weekly),
    ("/about", 0.5, ChangeFrequency::Monthly),
];

const PRODUCT_PRIORITY: f32 = 0.8;
const ARTICLE_PRIORITY: f32 = 0.7;

/// Sitemap entries: static pages stamped with `now`, then products and
/// articles stamped with their `updated_at`.
pub fn entries(
    site: &SiteSettings,
    products: &[Product],
    articles: &[Article],
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let statics = STATIC_PAGES
        .iter()
        .map(|&(path, priority, change_frequency)| SitemapEntry {
            url: site.url(path),
            last_modified: now,
            change_frequency,
            priority,
        });

    let products = products.iter().map(|p| SitemapEntry {
        url: site.url(&format!("/products/{}", p.slug)),
        last_modified: p.updated_at,
        change_frequency: ChangeFrequency::Weekly,
        priority: PRODUCT_PRIORITY,
    });

    let articles = articles.iter().map(|a| SitemapEntry {
        url: site.url(&format!("/blog/{}", a.slug)),
        last_modified: a.updated_at,
        change_frequency: ChangeFrequency::Weekly,
        priority: ARTICLE_PRIORITY,
    });

    statics.chain(products).chain(articles).collect()
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_markup(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
