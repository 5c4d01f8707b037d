//! Tenant domains for ProductHub.
//!
//! Each configured host shows a curated subset of the catalog with its own
//! theme and SEO defaults. Hosts that are not configured fall back to a
//! built-in default.

mod domain;
mod error;
mod resolver;

pub use domain::{Analytics, DomainConfig, SeoDefaults, Theme};
pub use error::{SiteError, SiteResult};
pub use resolver::{strip_www, DomainResolver};
