//! Transport error categorization.
//!
//! All mapping from `reqwest` failures to [`AnalysisError`] kinds happens in
//! one place so the page fetcher and the tests agree on the mapping.

use super::types::AnalysisError;

/// Categorizes a `reqwest::Error` into an [`AnalysisError`].
///
/// Order matters: an HTTP status attached to the error wins over the transport
/// classification, then timeout and connect failures are distinguished, and
/// anything else becomes `FetchFailed`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `url` - The URL whose fetch produced the error (for error context)
pub fn categorize_fetch_error(error: &reqwest::Error, url: &str) -> AnalysisError {
    if let Some(status) = error.status() {
        return match status.as_u16() {
            401 | 403 => AnalysisError::AccessBlocked {
                url: url.to_string(),
                status: status.as_u16(),
            },
            _ => AnalysisError::FetchFailed {
                url: url.to_string(),
                reason: format!("HTTP {}", status),
            },
        };
    }

    if error.is_timeout() {
        AnalysisError::Timeout(url.to_string())
    } else if error.is_connect() {
        // DNS failures surface as connect errors in reqwest
        AnalysisError::HostUnreachable(url.to_string())
    } else if error.is_redirect() {
        AnalysisError::FetchFailed {
            url: url.to_string(),
            reason: "redirect limit exceeded".to_string(),
        }
    } else {
        AnalysisError::FetchFailed {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }
}

/// Categorizes a non-2xx HTTP status into an [`AnalysisError`].
///
/// Used when the response arrived but the status disqualifies it: 401/403 are
/// the bot-rejection pair, everything else is a generic fetch failure.
pub fn categorize_http_status(status: reqwest::StatusCode, url: &str) -> AnalysisError {
    match status.as_u16() {
        401 | 403 => AnalysisError::AccessBlocked {
            url: url.to_string(),
            status: status.as_u16(),
        },
        _ => AnalysisError::FetchFailed {
            url: url.to_string(),
            reason: format!("HTTP {}", status),
        },
    }
}
