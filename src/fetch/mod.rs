//! Page and stylesheet fetching.
//!
//! Two failure disciplines live here. The primary page fetch is load-bearing:
//! its failures are categorized into [`AnalysisError`] kinds and fail the
//! whole analysis. Stylesheet fetches are auxiliary: any failure degrades to
//! an empty string so the font and color heuristics lose one source, never
//! the request.

use futures::future::join_all;

use crate::error_handling::{categorize_fetch_error, categorize_http_status, AnalysisError};

/// Content-negotiation headers applied to every outgoing request.
///
/// The User-Agent (set at client build time) identifies the tool; these only
/// declare what we can consume.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies page-fetch Accept headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_for_page(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
    }

    /// Applies stylesheet-fetch Accept headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_for_stylesheet(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder.header(reqwest::header::ACCEPT, "text/css,*/*;q=0.1")
    }
}

/// Fetches the primary page for an analysis.
///
/// Issues a GET through the page client (identity User-Agent, 12s timeout,
/// redirect cap). Returns the body text on 2xx.
///
/// # Errors
///
/// - [`AnalysisError::AccessBlocked`] on 401/403
/// - [`AnalysisError::HostUnreachable`] on DNS/connection failure
/// - [`AnalysisError::Timeout`] when the fetch exceeds its bound
/// - [`AnalysisError::FetchFailed`] for any other non-2xx or transport error
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, AnalysisError> {
    let request = RequestHeaders::apply_for_page(client.get(url));
    let response = request
        .send()
        .await
        .map_err(|e| categorize_fetch_error(&e, url))?;

    let status = response.status();
    if !status.is_success() {
        log::debug!("Page fetch returned {} for {}", status, url);
        return Err(categorize_http_status(status, url));
    }

    response
        .text()
        .await
        .map_err(|e| categorize_fetch_error(&e, url))
}

/// Fetches a single stylesheet, degrading every failure to an empty string.
///
/// Non-2xx responses, transport errors, and body decode failures all yield
/// `""` - a stylesheet that cannot be read contributes no fonts or colors but
/// must not abort the analysis.
pub async fn fetch_stylesheet(client: &reqwest::Client, url: &str) -> String {
    let request = RequestHeaders::apply_for_stylesheet(client.get(url));
    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::debug!("Stylesheet fetch failed for {}: {}", url, e);
            return String::new();
        }
    };

    if !response.status().is_success() {
        log::debug!(
            "Stylesheet fetch returned {} for {}",
            response.status(),
            url
        );
        return String::new();
    }

    match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::debug!("Stylesheet body read failed for {}: {}", url, e);
            String::new()
        }
    }
}

/// Fetches a set of stylesheets concurrently.
///
/// Each fetch is an independent task gathered with a join that does not
/// short-circuit: one sheet failing (yielding `""`) never cancels or fails
/// the others. Results come back in input order.
pub async fn fetch_stylesheets(client: &reqwest::Client, urls: &[String]) -> Vec<String> {
    let fetches = urls.iter().map(|url| fetch_stylesheet(client, url));
    join_all(fetches).await
}
