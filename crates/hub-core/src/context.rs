//! Request context with the tenant host and typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CoreError;
use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:04x}", nanos, counter & 0xffff))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Other,
}

impl From<&http::Method> for Method {
    fn from(method: &http::Method) -> Self {
        match *method {
            http::Method::GET => Method::Get,
            http::Method::HEAD => Method::Head,
            http::Method::POST => Method::Post,
            _ => Method::Other,
        }
    }
}

/// Typed request context passed to page handlers.
///
/// The `host` is the tenant selection key. It is taken verbatim from the
/// `Host` header (port included) so that it can be matched against the
/// configured domain table.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Hostname the request was addressed to.
    pub host: String,
    /// Request path (without query string).
    pub path: String,
    /// Query string parameters.
    pub query: QueryParams,
    /// Raw query string, as received.
    pub raw_query: String,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context for a host and path.
    ///
    /// A query string in `path_with_query` is split off and parsed.
    pub fn new(host: impl Into<String>, path_with_query: &str) -> Self {
        let (path, raw_query) = match path_with_query.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (path_with_query.to_string(), String::new()),
        };

        Self {
            request_id: RequestId::generate(),
            method: Method::Get,
            host: host.into(),
            path: if path.is_empty() { "/".to_string() } else { path },
            query: parse_query_string(&raw_query),
            raw_query,
            headers: HashMap::new(),
            timing: TimingContext::new(),
        }
    }

    /// Build a context from an `http::Request`.
    ///
    /// The host comes from the `Host` header, then the request URI authority,
    /// then `default_host`. A `Host` header that is not valid UTF-8 is an error.
    pub fn from_http<B>(req: &http::Request<B>, default_host: &str) -> Result<Self, CoreError> {
        let host = match req.headers().get(http::header::HOST) {
            Some(value) => value
                .to_str()
                .map_err(|_| CoreError::InvalidHost(format!("{:?}", value)))?
                .trim()
                .to_string(),
            None => req
                .uri()
                .authority()
                .map(|a| a.as_str().to_string())
                .unwrap_or_default(),
        };
        let host = if host.is_empty() {
            default_host.to_string()
        } else {
            host
        };

        let path_with_query = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let mut ctx = Self::new(host, path_with_query);
        ctx.method = Method::from(req.method());

        for (name, value) in req.headers() {
            if let Ok(value) = value.to_str() {
                ctx.headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        if let Some(id) = ctx.header("x-request-id") {
            ctx.request_id = RequestId::from_string(id);
        }

        Ok(ctx)
    }

    /// Set a header (builder style, used by tests and the CLI).
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse a URL query string into decoded key/value pairs.
///
/// Later duplicates win. Keys without a value map to an empty string.
pub fn parse_query_string(qs: &str) -> QueryParams {
    let mut params = HashMap::new();

    for pair in qs.split('&').filter(|p| !p.is_empty()) {
        let mut parts = pair.splitn(2, '=');
        let key = url_decode(parts.next().unwrap_or(""));
        let value = url_decode(parts.next().unwrap_or(""));
        if !key.is_empty() {
            params.insert(key, value);
        }
    }

    params
}

/// Decode a percent-encoded query component (`+` is a space).
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match decode_hex_pair(bytes[i + 1], bytes[i + 2]) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encode a query component.
pub fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}
