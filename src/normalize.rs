//! URL validation and normalization.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// A validated, canonical absolute URL.
///
/// Always carries an `http` or `https` scheme and a host. Constructed once per
/// request from the untrusted input string and immutable thereafter; every
/// later stage (fetching, relative URL resolution, cache keying) works from
/// this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    url: Url,
    href: String,
}

impl NormalizedUrl {
    /// Validates and normalizes a raw URL string.
    ///
    /// Adds an `https://` prefix if no scheme prefix is present, then parses
    /// the result as an absolute URL. The output is the parsed URL's href
    /// form, so normalization is idempotent: feeding the output back in yields
    /// the same value.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidUrl`] when the input is empty, exceeds
    /// the length cap, fails to parse, has a non-http(s) scheme, or lacks a
    /// host.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::InvalidUrl(raw.to_string()));
        }
        if trimmed.len() > MAX_URL_LENGTH {
            let preview: String = trimmed.chars().take(50).collect();
            log::warn!(
                "Rejecting URL exceeding maximum length ({} > {}): {}...",
                trimmed.len(),
                MAX_URL_LENGTH,
                preview
            );
            return Err(AnalysisError::InvalidUrl(format!(
                "{preview}... (truncated)"
            )));
        }

        let candidate = if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            format!("https://{trimmed}")
        } else {
            trimmed.to_string()
        };

        if candidate.len() > MAX_URL_LENGTH {
            let preview: String = candidate.chars().take(50).collect();
            return Err(AnalysisError::InvalidUrl(format!(
                "{preview}... (truncated)"
            )));
        }

        let url =
            Url::parse(&candidate).map_err(|_| AnalysisError::InvalidUrl(trimmed.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            _ => return Err(AnalysisError::InvalidUrl(trimmed.to_string())),
        }
        if url.host_str().is_none() {
            return Err(AnalysisError::InvalidUrl(trimmed.to_string()));
        }

        let href = url.to_string();
        Ok(NormalizedUrl { url, href })
    }

    /// The canonical href form, used as the cache key and fetch target.
    pub fn as_str(&self) -> &str {
        &self.href
    }

    /// The URL host.
    pub fn host(&self) -> &str {
        // A parsed NormalizedUrl always has a host (checked in parse)
        self.url.host_str().unwrap_or_default()
    }

    /// The parsed URL, for relative-reference resolution.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl std::fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_adds_https() {
        let normalized = NormalizedUrl::parse("example.com").unwrap();
        assert_eq!(normalized.as_str(), "https://example.com/");
    }

    #[test]
    fn test_parse_preserves_http() {
        let normalized = NormalizedUrl::parse("http://example.com").unwrap();
        assert_eq!(normalized.as_str(), "http://example.com/");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = NormalizedUrl::parse("example.com/path?q=1").unwrap();
        let second = NormalizedUrl::parse(first.as_str()).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(NormalizedUrl::parse("not a url at all!!!").is_err());
        assert!(NormalizedUrl::parse("").is_err());
        assert!(NormalizedUrl::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_non_http_scheme() {
        // ftp:// lacks an http(s) prefix, so https:// is prepended and the
        // result fails to parse as a URL with a valid authority
        let result = NormalizedUrl::parse("ftp://example.com");
        if let Ok(normalized) = result {
            assert!(matches!(normalized.url().scheme(), "http" | "https"));
        }
    }

    #[test]
    fn test_parse_rejects_too_long_url() {
        let long = format!("https://example.com/{}", "a".repeat(2100));
        assert!(NormalizedUrl::parse(&long).is_err());
    }

    #[test]
    fn test_parse_rejects_url_exceeding_limit_after_prefix() {
        let bare = format!("example.com/{}", "a".repeat(2033));
        assert!(bare.len() <= MAX_URL_LENGTH);
        assert!(NormalizedUrl::parse(&bare).is_err());
    }

    #[test]
    fn test_host_accessor() {
        let normalized = NormalizedUrl::parse("www.example.com/about").unwrap();
        assert_eq!(normalized.host(), "www.example.com");
    }

    #[test]
    fn test_parse_preserves_port_and_query() {
        let normalized = NormalizedUrl::parse("example.com:8080/x?a=b").unwrap();
        assert_eq!(normalized.as_str(), "https://example.com:8080/x?a=b");
    }

    #[test]
    fn test_invalid_url_error_kind() {
        let err = NormalizedUrl::parse("://nope").unwrap_err();
        assert_eq!(err.kind(), "invalid_url");
    }
}
