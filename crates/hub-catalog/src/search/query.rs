//! Query validation and search options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted raw query, in characters.
pub const MAX_QUERY_LEN: usize = 100;

/// Errors from query validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The raw query exceeds [`MAX_QUERY_LEN`].
    #[error("Search query too long ({len} characters, max {max})")]
    QueryTooLong { len: usize, max: usize },
}

/// Options for [`crate::search::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub limit: usize,
    pub include_products: bool,
    pub include_articles: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            include_products: true,
            include_articles: true,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn products_only(mut self) -> Self {
        self.include_products = true;
        self.include_articles = false;
        self
    }

    pub fn articles_only(mut self) -> Self {
        self.include_products = false;
        self.include_articles = true;
        self
    }
}

/// Validate and clean a raw query.
///
/// The length limit applies to the raw input. Tag-like `<...>` runs are
/// removed, then any stray angle brackets, then surrounding whitespace.
/// An empty result means "no query".
pub fn sanitize_query(raw: &str) -> Result<String, SearchError> {
    let len = raw.chars().count();
    if len > MAX_QUERY_LEN {
        tracing::debug!(len, max = MAX_QUERY_LEN, "search query rejected");
        return Err(SearchError::QueryTooLong {
            len,
            max: MAX_QUERY_LEN,
        });
    }

    let mut cleaned = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        cleaned.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        rest = match after.find('>') {
            Some(close) => &after[close + 1..],
            None => after,
        };
    }
    cleaned.push_str(rest);

    Ok(cleaned
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_query_trimmed() {
        assert_eq!(sanitize_query("  flagship phone ").unwrap(), "flagship phone");
    }

    #[test]
    fn test_tags_stripped() {
        assert_eq!(
            sanitize_query("<script>alert(1)</script>phone").unwrap(),
            "alert(1)phone"
        );
        assert_eq!(sanitize_query("<b>audio</b>").unwrap(), "audio");
    }

    #[test]
    fn test_stray_brackets_stripped() {
        assert_eq!(sanitize_query("a > b").unwrap(), "a  b");
        assert_eq!(sanitize_query("phone <").unwrap(), "phone");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(sanitize_query("   ").unwrap(), "");
        assert_eq!(sanitize_query("<br>").unwrap(), "");
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        assert!(sanitize_query(&"a".repeat(100)).is_ok());
        assert_eq!(
            sanitize_query(&"a".repeat(101)),
            Err(SearchError::QueryTooLong { len: 101, max: 100 })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(sanitize_query(&"\u{00e9}".repeat(100)).is_ok());
    }

    #[test]
    fn test_astral_characters_count_once() {
        let emoji = "\u{1F600}".repeat(100);
        assert_eq!(emoji.encode_utf16().count(), 200);
        assert!(sanitize_query(&emoji).is_ok());
        assert_eq!(
            sanitize_query(&"\u{1F600}".repeat(101)),
            Err(SearchError::QueryTooLong { len: 101, max: 100 })
        );
    }

    #[test]
    fn test_options_builders() {
        let opts = SearchOptions::default().with_limit(5).articles_only();
        assert_eq!(opts.limit, 5);
        assert!(!opts.include_products);
        assert!(opts.include_articles);
    }
}
