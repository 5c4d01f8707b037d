//! Domain table errors.

/// Result type for domain table operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors from loading the domain table.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("duplicate host: {0}")]
    DuplicateHost(String),

    #[error("domain {0} has an empty SEO title")]
    MissingSeoTitle(String),

    #[error("domain entry has an empty host")]
    EmptyHost,

    #[error("failed to parse domain table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read domain table: {0}")]
    Io(#[from] std::io::Error),
}
