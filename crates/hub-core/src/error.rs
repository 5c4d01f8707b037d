//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while building request-level types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The `Host` header could not be read.
    #[error("Invalid host header: {0}")]
    InvalidHost(String),

    /// A settings value is out of range or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
