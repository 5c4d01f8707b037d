use chrono::{DateTime, Utc};
use hub_seo::{sitemap, Robots};

use crate::storefront::Storefront;

impl Storefront {
    /// sitemap.xml covering static pages and the whole catalog.
    pub fn sitemap(&self, now: DateTime<Utc>) -> String {
        let catalog = self.catalog();
        let entries = sitemap::entries(self.settings(), catalog.products(), catalog.articles(), now);
        sitemap::render_xml(&entries)
    }

    /// robots.txt for the site.
    pub fn robots(&self) -> String {
        Robots::standard(self.settings()).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::SiteSettings;

    #[test]
    fn test_sitemap_lists_every_record() {
        let store = Storefront::bundled(SiteSettings::default()).unwrap();
        let xml = store.sitemap(Utc::now());
        let expected = 6 + store.catalog().products().len() + store.catalog().articles().len();
        assert_eq!(xml.matches("<url>").count(), expected);
        assert!(xml.contains("<loc>https://producthub.com/blog/gaming-setup-guide</loc>"));
    }

    #[test]
    fn test_robots_uses_base_url() {
        let settings = SiteSettings::default().with_base_url("https://tech-reviews.com");
        let store = Storefront::bundled(settings).unwrap();
        assert!(store
            .robots()
            .contains("Sitemap: https://tech-reviews.com/sitemap.xml"));
    }
}
