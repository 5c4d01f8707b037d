//! Structured logging with request context.
//!
//! Log records are emitted as `tracing` events so that the process-wide
//! subscriber installed by [`init_tracing`] decides on formatting and output.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use hub_core::{RequestContext, RequestId};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Errors from parsing logging settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogSettingsError {
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    #[error("unknown log format: {0} (expected 'json' or 'human')")]
    UnknownFormat(String),
}

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LogSettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LogSettingsError::UnknownLevel(other.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl FromStr for LogFormat {
    type Err = LogSettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "pretty" | "text" => Ok(Self::Human),
            other => Err(LogSettingsError::UnknownFormat(other.to_string())),
        }
    }
}

/// Install the process-wide `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Returns `false` when a
/// subscriber was already installed; repeated calls are harmless.
pub fn init_tracing(format: LogFormat, level: LogLevel) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Human => builder.compact().try_init().is_ok(),
    }
}

/// Install the subscriber from `hub_core::LogSettings` strings.
pub fn init_from_settings(settings: &hub_core::LogSettings) -> Result<bool, LogSettingsError> {
    let format = settings.format.parse::<LogFormat>()?;
    let level = settings.level.parse::<LogLevel>()?;
    Ok(init_tracing(format, level))
}

macro_rules! emit_at {
    ($level:expr, $($args:tt)*) => {
        match $level {
            LogLevel::Trace => tracing::trace!($($args)*),
            LogLevel::Debug => tracing::debug!($($args)*),
            LogLevel::Info => tracing::info!($($args)*),
            LogLevel::Warn => tracing::warn!($($args)*),
            LogLevel::Error => tracing::error!($($args)*),
        }
    };
}

/// Structured logger with request context.
///
/// Every record carries the request ID, the tenant host and the route, plus
/// elapsed time since the logger was created.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    host: Option<String>,
    route: Option<String>,
    start_time: std::time::Instant,
    min_level: LogLevel,
}

impl StructuredLogger {
    /// Create a new logger with request context.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            host: None,
            route: None,
            start_time: std::time::Instant::now(),
            min_level: LogLevel::Trace,
        }
    }

    /// Create a logger for a request (request ID, host and path).
    pub fn for_request(ctx: &RequestContext) -> Self {
        Self::new(ctx.request_id.clone())
            .with_host(&ctx.host)
            .with_route(&ctx.path)
    }

    /// Set the tenant host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Set minimum log level (applied before the subscriber's filter).
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let fields = if fields.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&fields).unwrap_or_default()
        };

        emit_at!(
            level,
            request_id = %self.request_id,
            host = self.host.as_deref().unwrap_or(""),
            route = self.route.as_deref().unwrap_or(""),
            elapsed_us = self.elapsed_us(),
            fields = %fields,
            "{}",
            message
        );
    }

    /// Get the request ID.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }

    /// Whether a record at `level` would be emitted by this logger.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in microseconds).
    pub fn duration_us(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_micros() as u64));
        self
    }

    /// Fields collected so far, as JSON.
    pub fn fields_json(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_default()
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("Human".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert_eq!(
            "xml".parse::<LogFormat>(),
            Err(LogSettingsError::UnknownFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn test_min_level_gate() {
        let logger = StructuredLogger::new(RequestId::from_string("req-1"))
            .with_min_level(LogLevel::Warn);
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn test_for_request_copies_context() {
        let ctx = RequestContext::new("fitness-gear.com", "/products?sort=rating");
        let logger = StructuredLogger::for_request(&ctx);
        assert_eq!(logger.request_id(), &ctx.request_id);
        assert_eq!(logger.host.as_deref(), Some("fitness-gear.com"));
        assert_eq!(logger.route.as_deref(), Some("/products"));
    }

    #[test]
    fn test_builder_collects_fields() {
        let logger = StructuredLogger::new(RequestId::from_string("req-2"));
        let builder = logger
            .info_builder("search served")
            .field("query", "phone")
            .field_i64("results", 3)
            .field_bool("fallback", false);

        assert_eq!(
            builder.fields_json(),
            r#"{"fallback":false,"query":"phone","results":3}"#
        );
        builder.emit();
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(LogFormat::Human, LogLevel::Info);
        assert!(!init_tracing(LogFormat::Json, LogLevel::Debug));
    }
}
