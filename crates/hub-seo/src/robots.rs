//! robots.txt.

use hub_core::SiteSettings;
use serde::Serialize;

/// Allow/disallow lists for one user agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

impl RobotsRule {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            allow: Vec::new(),
            disallow: Vec::new(),
        }
    }

    pub fn allow(mut self, path: impl Into<String>) -> Self {
        self.allow.push(path.into());
        self
    }

    pub fn disallow(mut self, path: impl Into<String>) -> Self {
        self.disallow.push(path.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
    pub host: String,
}

impl Robots {
    /// Default crawl policy for a site.
    pub fn standard(site: &SiteSettings) -> Self {
        let everyone = ["/api/", "/admin/", "/_next/", "/static/", "*.json", "/search"]
            .into_iter()
            .fold(RobotsRule::new("*").allow("/"), |rule, path| rule.disallow(path));

        let googlebot = ["/", "/products/", "/blog/", "/about", "/compare"]
            .into_iter()
            .fold(RobotsRule::new("Googlebot"), |rule, path| rule.allow(path));
        let googlebot = ["/api/", "/admin/", "/_next/"]
            .into_iter()
            .fold(googlebot, |rule, path| rule.disallow(path));

        Self {
            rules: vec![everyone, googlebot],
            sitemap: site.url("/sitemap.xml"),
            host: site.url("/"),
        }
    }

    /// robots.txt text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            out.push_str(&format!("User-agent: {}\n", rule.user_agent));
            for path in &rule.allow {
                out.push_str(&format!("Allow: {}\n", path));
            }
            for path in &rule.disallow {
                out.push_str(&format!("Disallow: {}\n", path));
            }
            out.push('\n');
        }
        out.push_str(&format!("Sitemap: {}\n", self.sitemap));
        out.push_str(&format!("Host: {}\n", self.host));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_rules() {
        let robots = Robots::standard(&SiteSettings::default());
        assert_eq!(robots.rules.len(), 2);
        assert_eq!(robots.rules[0].user_agent, "*");
        assert_eq!(robots.rules[0].allow, vec!["/"]);
        assert!(robots.rules[0].disallow.contains(&"*.json".to_string()));
        assert_eq!(robots.rules[1].disallow, vec!["/api/", "/admin/", "/_next/"]);
        assert_eq!(robots.sitemap, "https://producthub.com/sitemap.xml");
    }

    #[test]
    fn test_render() {
        let site = SiteSettings::default().with_base_url("https://fitness-gear.com/");
        let text = Robots::standard(&site).render();

        assert!(text.starts_with("User-agent: *\nAllow: /\nDisallow: /api/\n"));
        assert!(text.contains("\nUser-agent: Googlebot\nAllow: /\nAllow: /products/\n"));
        assert!(text.ends_with(
            "Sitemap: https://fitness-gear.com/sitemap.xml\nHost: https://fitness-gear.com\n"
        ));
    }
}
