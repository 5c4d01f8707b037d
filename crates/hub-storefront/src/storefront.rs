//! The storefront service.

use std::path::Path;
use std::sync::Arc;

use hub_catalog::catalog::{Catalog, Product};
use hub_core::{LifecyclePhase, RequestContext, SiteSettings, TimingContext};
use hub_media::FallbackChain;
use hub_observability::{request_span, StructuredLogger};
use hub_sites::{DomainConfig, DomainResolver};

use crate::error::StorefrontError;
use crate::views::SiteView;

/// Shared, read-only state behind every page.
///
/// Cloning is cheap; the catalog and domain table are reference counted.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    sites: Arc<DomainResolver>,
    settings: SiteSettings,
    images: FallbackChain,
}

impl Storefront {
    pub fn new(catalog: Arc<Catalog>, sites: Arc<DomainResolver>, settings: SiteSettings) -> Self {
        Self {
            catalog,
            sites,
            settings,
            images: FallbackChain::default(),
        }
    }

    /// Storefront over the bundled catalog and domain table.
    pub fn bundled(settings: SiteSettings) -> Result<Self, StorefrontError> {
        settings.validate()?;
        Ok(Self::new(
            Arc::new(Catalog::bundled()?),
            Arc::new(DomainResolver::bundled()?),
            settings,
        ))
    }

    /// Storefront over a seed directory and a domain table file.
    ///
    /// `None` keeps the bundled data for that part.
    pub fn load(
        settings: SiteSettings,
        data_dir: Option<&Path>,
        domains_file: Option<&Path>,
    ) -> Result<Self, StorefrontError> {
        settings.validate()?;
        let catalog = match data_dir {
            Some(dir) => Catalog::load_dir(dir)?,
            None => Catalog::bundled()?,
        };
        let sites = match domains_file {
            Some(file) => DomainResolver::load_file(file)?,
            None => DomainResolver::bundled()?,
        };
        Ok(Self::new(Arc::new(catalog), Arc::new(sites), settings))
    }

    /// Replace the image fallback chain.
    pub fn with_images(mut self, images: FallbackChain) -> Self {
        self.images = images;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sites(&self) -> &DomainResolver {
        &self.sites
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn images(&self) -> &FallbackChain {
        &self.images
    }

    /// Domain configuration for a host, or the default config.
    pub fn domain(&self, host: &str) -> &DomainConfig {
        self.sites.resolve_or_default(host)
    }

    /// Products shown on `host`, in catalog order.
    ///
    /// Ids with no catalog record are skipped.
    pub fn visible_products(&self, host: &str) -> Vec<&Product> {
        self.catalog.products_by_ids(&self.domain(host).products)
    }

    /// Header branding for a host.
    ///
    /// Unconfigured hosts get the site name as their title.
    pub(crate) fn site_view(&self, host: &str) -> SiteView {
        let configured = self.sites.resolve(host);
        let domain = self.domain(host);
        SiteView {
            name: self.settings.name.clone(),
            host: host.to_string(),
            title: configured
                .map(|d| d.seo.title.clone())
                .unwrap_or_else(|| self.settings.name.clone()),
            description: domain.seo.description.clone(),
            logo: domain.logo().map(str::to_string),
            primary_color: domain.primary_color().map(str::to_string),
            google_analytics_id: domain.google_analytics_id().map(str::to_string),
            configured: configured.is_some(),
        }
    }

    /// Logger, span and timing marks for one page render.
    ///
    /// Timing starts from the request's own clock.
    pub(crate) fn scope(&self, ctx: &RequestContext, page: &'static str) -> PageScope {
        let mut timing = ctx.timing.clone();
        let _domain = self.sites.resolve_or_default(&ctx.host);
        timing.mark_phase(&LifecyclePhase::DomainResolved);
        PageScope {
            logger: StructuredLogger::for_request(ctx),
            span: request_span(ctx),
            page,
            timing,
        }
    }
}

pub(crate) struct PageScope {
    pub(crate) logger: StructuredLogger,
    pub(crate) span: tracing::Span,
    pub(crate) page: &'static str,
    pub(crate) timing: TimingContext,
}

impl PageScope {
    /// Page data has been gathered; only view assembly remains.
    pub(crate) fn data_ready(&mut self) {
        self.timing.mark_phase(&LifecyclePhase::DataReady);
    }

    /// Log a rendered page with its item count and phase timings.
    pub(crate) fn rendered(&mut self, items: usize) {
        self.timing.mark_phase(&LifecyclePhase::Completion);
        let _entered = self.span.enter();
        let mut entry = self
            .logger
            .debug_builder("page rendered")
            .field("page", self.page)
            .field_i64("items", items as i64);
        if let Some(resolved) = self.timing.since_start(LifecyclePhase::DomainResolved.mark_name()) {
            entry = entry.duration_us("domain_resolved_us", resolved);
        }
        if let Some(data) = self.timing.between(
            LifecyclePhase::DomainResolved.mark_name(),
            LifecyclePhase::DataReady.mark_name(),
        ) {
            entry = entry.duration_us("data_ready_us", data);
        }
        entry.duration_us("total_us", self.timing.elapsed()).emit();
    }

    pub(crate) fn not_found(&mut self, slug: &str) {
        self.timing
            .mark_phase(&LifecyclePhase::Error(format!("no page for {}", slug)));
        let _entered = self.span.enter();
        self.logger
            .info_builder("page not found")
            .field("page", self.page)
            .field("slug", slug)
            .duration_us("total_us", self.timing.elapsed())
            .emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Storefront {
        Storefront::bundled(SiteSettings::default()).unwrap()
    }

    #[test]
    fn test_visible_products_follow_catalog_order() {
        let sites = DomainResolver::from_toml(
            r#"
[[domains]]
host = "reverse.example"
products = ["smart-coffee-maker", "missing-product", "laptop-pro", "smartphone-x1"]

[domains.seo]
title = "Reverse"
description = "Configured in reverse catalog order"
"#,
        )
        .unwrap();
        let store = Storefront::new(
            Arc::new(Catalog::bundled().unwrap()),
            Arc::new(sites),
            SiteSettings::default(),
        );

        let ids: Vec<&str> = store
            .visible_products("reverse.example")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["smartphone-x1", "laptop-pro", "smart-coffee-maker"]);
    }

    #[test]
    fn test_unknown_host_has_no_products() {
        let store = storefront();
        assert!(store.visible_products("nowhere.example").is_empty());

        let site = store.site_view("nowhere.example");
        assert_eq!(site.title, "ProductHub");
        assert!(!site.configured);
    }

    #[test]
    fn test_site_view_branding() {
        let site = storefront().site_view("www.tech-reviews.com");
        assert!(site.configured);
        assert_eq!(site.logo.as_deref(), Some("/logos/tech-reviews-logo.png"));
        assert_eq!(site.google_analytics_id.as_deref(), Some("G-XXXXXXXXXX"));
    }

    #[test]
    fn test_scope_records_page_phases() {
        let store = storefront();
        let ctx = RequestContext::new("tech-reviews.com", "/products");
        let mut scope = store.scope(&ctx, "product_listing");
        assert_eq!(scope.timing.mark_names(), vec!["domain_resolved"]);

        scope.data_ready();
        scope.rendered(2);
        assert_eq!(
            scope.timing.mark_names(),
            vec!["completion", "data_ready", "domain_resolved"]
        );
        assert!(scope.timing.between("domain_resolved", "data_ready").is_some());
        assert!(scope.timing.between("data_ready", "completion").is_some());
    }

    #[test]
    fn test_not_found_marks_error() {
        let store = storefront();
        let ctx = RequestContext::new("tech-reviews.com", "/products/missing");
        let mut scope = store.scope(&ctx, "product_detail");
        scope.not_found("missing");
        assert_eq!(scope.timing.mark_names(), vec!["domain_resolved", "error"]);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = SiteSettings::default().with_base_url("ftp://producthub.com");
        assert!(matches!(
            Storefront::bundled(settings),
            Err(StorefrontError::Settings(_))
        ));
    }
}
