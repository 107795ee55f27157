//! HTTP client initialization.
//!
//! Two purpose-built clients: one for the primary page (longer timeout,
//! bounded redirect following) and one for stylesheets (shorter timeout,
//! failures tolerated by the callers).

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS, STYLESHEET_FETCH_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the primary page fetch.
///
/// Configured with:
/// - User-Agent from config (identity string, not a browser impersonation)
/// - Timeout from config (defaults to the 12s page bound)
/// - Redirect following capped at `MAX_REDIRECT_HOPS`
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_page_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used for auxiliary stylesheet fetches.
///
/// Shorter timeout than the page client; stylesheet failures are recovered as
/// empty text by the fetch layer, so this client's errors never fail a request.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_stylesheet_client(
    config: &Config,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(STYLESHEET_FETCH_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
