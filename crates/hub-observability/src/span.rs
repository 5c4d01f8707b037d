//! Trace context propagation and request spans.

use std::sync::atomic::{AtomicU64, Ordering};

use hub_core::{RequestContext, RequestId};

/// Trace context for distributed tracing.
///
/// Compatible with the W3C Trace Context `traceparent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// The trace ID (128-bit, hex encoded).
    pub trace_id: String,
    /// The span ID (64-bit, hex encoded).
    pub span_id: String,
    /// Parent span ID if this is a child span.
    pub parent_span_id: Option<String>,
    /// Trace flags.
    pub flags: TraceFlags,
}

/// Trace flags indicating sampling decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceFlags {
    /// Whether this trace is sampled.
    pub sampled: bool,
}

impl TraceContext {
    /// Create a new root trace context.
    pub fn new() -> Self {
        Self {
            trace_id: generate_trace_id(),
            span_id: generate_span_id(),
            parent_span_id: None,
            flags: TraceFlags { sampled: true },
        }
    }

    /// Create a child span from this context.
    pub fn child(&self) -> Self {
        Self {
            trace_id: self.trace_id.clone(),
            span_id: generate_span_id(),
            parent_span_id: Some(self.span_id.clone()),
            flags: self.flags,
        }
    }

    /// Create from a request ID (uses request ID as trace ID).
    pub fn from_request_id(request_id: &RequestId) -> Self {
        Self {
            trace_id: request_id.0.clone(),
            span_id: generate_span_id(),
            parent_span_id: None,
            flags: TraceFlags { sampled: true },
        }
    }

    /// Continue an incoming trace, or start one keyed by the request ID.
    ///
    /// The incoming span becomes the parent of the returned context.
    pub fn for_request(ctx: &RequestContext) -> Self {
        match ctx.header("traceparent").and_then(Self::from_traceparent) {
            Some(incoming) => incoming.child(),
            None => Self::from_request_id(&ctx.request_id),
        }
    }

    /// Parse from W3C traceparent header.
    ///
    /// Format: `{version}-{trace_id}-{span_id}-{flags}`
    /// Example: `00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01`
    pub fn from_traceparent(header: &str) -> Option<Self> {
        let parts: Vec<&str> = header.trim().split('-').collect();
        if parts.len() != 4 || parts[0] != "00" {
            return None;
        }

        let (trace_id, span_id) = (parts[1], parts[2]);
        if !is_hex_of_len(trace_id, 32) || !is_hex_of_len(span_id, 16) {
            return None;
        }

        let flags = u8::from_str_radix(parts[3], 16).ok()?;

        Some(Self {
            trace_id: trace_id.to_lowercase(),
            span_id: span_id.to_lowercase(),
            parent_span_id: None,
            flags: TraceFlags {
                sampled: flags & 0x01 != 0,
            },
        })
    }

    /// Format as W3C traceparent header.
    pub fn to_traceparent(&self) -> String {
        let flags = if self.flags.sampled { "01" } else { "00" };
        format!("00-{}-{}-{}", self.trace_id, self.span_id, flags)
    }
}

impl Default for TraceContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a `tracing` span covering one storefront request.
pub fn request_span(ctx: &RequestContext) -> tracing::Span {
    let trace = TraceContext::for_request(ctx);
    tracing::info_span!(
        "request",
        request_id = %ctx.request_id,
        host = %ctx.host,
        path = %ctx.path,
        trace_id = %trace.trace_id,
        span_id = %trace.span_id,
    )
}

fn is_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn generate_trace_id() -> String {
    format!("{:016x}{:016x}", next_id_bits(), next_id_bits())
}

fn generate_span_id() -> String {
    format!("{:016x}", next_id_bits())
}

// Not cryptographically secure; only has to be unique within a process.
fn next_id_bits() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);

    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    time ^ counter.wrapping_mul(0x517cc1b727220a95)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01";

    #[test]
    fn test_traceparent_parse() {
        let ctx = TraceContext::from_traceparent(SAMPLE).unwrap();
        assert_eq!(ctx.trace_id, "0af7651916cd43dd8448eb211c80319c");
        assert_eq!(ctx.span_id, "b7ad6b7169203331");
        assert!(ctx.flags.sampled);
        assert_eq!(ctx.to_traceparent(), SAMPLE);
    }

    #[test]
    fn test_traceparent_rejects_malformed() {
        assert!(TraceContext::from_traceparent("01-abc-def-01").is_none());
        assert!(TraceContext::from_traceparent("00-short-b7ad6b7169203331-01").is_none());
        assert!(TraceContext::from_traceparent("00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331").is_none());
        assert!(TraceContext::from_traceparent("00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-zz").is_none());
    }

    #[test]
    fn test_child_keeps_trace_id() {
        let root = TraceContext::new();
        let child = root.child();
        assert_eq!(child.trace_id, root.trace_id);
        assert_eq!(child.parent_span_id.as_deref(), Some(root.span_id.as_str()));
        assert_ne!(child.span_id, root.span_id);
    }

    #[test]
    fn test_for_request_continues_incoming_trace() {
        let ctx = RequestContext::new("tech-reviews.com", "/").with_header("traceparent", SAMPLE);
        let trace = TraceContext::for_request(&ctx);
        assert_eq!(trace.trace_id, "0af7651916cd43dd8448eb211c80319c");
        assert_eq!(trace.parent_span_id.as_deref(), Some("b7ad6b7169203331"));
    }

    #[test]
    fn test_for_request_without_header_uses_request_id() {
        let ctx = RequestContext::new("tech-reviews.com", "/");
        let trace = TraceContext::for_request(&ctx);
        assert_eq!(trace.trace_id, ctx.request_id.0);
    }

    #[test]
    fn test_generated_ids_have_expected_width() {
        let ctx = TraceContext::new();
        assert_eq!(ctx.trace_id.len(), 32);
        assert_eq!(ctx.span_id.len(), 16);
    }
}
