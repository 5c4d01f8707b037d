//! Core abstractions for the ProductHub storefront.
//!
//! This crate provides the fundamental request-level types:
//! - `RequestContext` - Host, path and query parameters of an inbound request
//! - `TimingContext` - Request lifecycle timing marks
//! - `SiteSettings` - Site-wide settings (base URL, default host, search limits)

mod config;
mod context;
mod error;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
