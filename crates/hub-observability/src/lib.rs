//! Observability for the ProductHub storefront.
//!
//! This crate provides:
//! - `init_tracing` - Process-wide `tracing` subscriber setup (JSON or human)
//! - `StructuredLogger` - Request-scoped logging with request ID and host
//! - `TraceContext` - W3C trace context propagation

mod logging;
mod span;

pub use logging::*;
pub use span::*;

// Re-export RequestId and TimingContext from hub-core for convenience
pub use hub_core::{RequestId, TimingContext};
