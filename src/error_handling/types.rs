//! Error and warning type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error kinds raised by the analysis pipeline.
///
/// The hosting layer is expected to map these to transport-level status codes;
/// [`AnalysisError::kind`] provides a stable machine-readable tag for that.
/// Stylesheet fetch failures never surface here - they degrade to empty CSS
/// text inside the font and color extractors.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The supplied string could not be normalized into an absolute http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The remote site rejected the request (HTTP 401/403, typically bot rejection).
    #[error("access blocked by {url} (HTTP {status})")]
    AccessBlocked {
        /// URL that rejected the request
        url: String,
        /// Rejecting status code (401 or 403)
        status: u16,
    },

    /// DNS resolution or TCP connection to the host failed.
    #[error("host unreachable: {0}")]
    HostUnreachable(String),

    /// The primary page fetch exceeded its timeout bound.
    #[error("timed out fetching {0}")]
    Timeout(String),

    /// Any other transport or non-2xx HTTP failure.
    #[error("fetch failed for {url}: {reason}")]
    FetchFailed {
        /// URL whose fetch failed
        url: String,
        /// Short human-readable failure reason
        reason: String,
    },
}

impl AnalysisError {
    /// Returns a stable machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidUrl(_) => "invalid_url",
            AnalysisError::AccessBlocked { .. } => "access_blocked",
            AnalysisError::HostUnreachable(_) => "host_unreachable",
            AnalysisError::Timeout(_) => "timeout",
            AnalysisError::FetchFailed { .. } => "fetch_failed",
        }
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Types of warnings that can occur during an analysis.
///
/// Warnings indicate missing optional signals that don't prevent a successful
/// analysis but are worth tracking across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// No og:title and no `<title>` text
    MissingTitle,
    /// No usable description meta tag
    MissingDescription,
    /// No logo markup on the page; only the synthesized favicon fallback applied
    MissingLogoMarkup,
    /// No font families discovered in any CSS source
    NoFontsFound,
    /// No brand colors survived filtering
    NoColorsFound,
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingDescription => "Missing description",
            WarningType::MissingLogoMarkup => "No logo markup (favicon fallback used)",
            WarningType::NoFontsFound => "No fonts found",
            WarningType::NoColorsFound => "No colors found",
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_analysis_error_kind_tags() {
        assert_eq!(
            AnalysisError::InvalidUrl("x".to_string()).kind(),
            "invalid_url"
        );
        assert_eq!(
            AnalysisError::AccessBlocked {
                url: "https://example.com/".to_string(),
                status: 403,
            }
            .kind(),
            "access_blocked"
        );
        assert_eq!(
            AnalysisError::Timeout("https://example.com/".to_string()).kind(),
            "timeout"
        );
    }

    #[test]
    fn test_analysis_error_display() {
        let err = AnalysisError::AccessBlocked {
            url: "https://example.com/".to_string(),
            status: 403,
        };
        assert_eq!(
            err.to_string(),
            "access blocked by https://example.com/ (HTTP 403)"
        );

        let err = AnalysisError::InvalidUrl("not a url".to_string());
        assert_eq!(err.to_string(), "invalid URL: not a url");
    }

    #[test]
    fn test_all_warning_types_have_string_representation() {
        for warning_type in WarningType::iter() {
            assert!(
                !warning_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                warning_type
            );
        }
    }
}
