//! HTTP client that retrieves a product page as raw markup.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::types::Target;

/// Upper bound on TCP/TLS connection setup, independent of the total
/// request timeout.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Fetches product pages with a single GET per call.
///
/// There is no retry: a failed request is logged and returned as a typed
/// [`ScraperError`] for the caller to handle.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` whose requests give up after `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::ClientBuild`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
            .build()
            .map_err(ScraperError::ClientBuild)?;
        Ok(Self { client })
    }

    /// Fetches the target page and returns its body as text.
    ///
    /// The target's identity string is sent as the `User-Agent` header. The
    /// body is returned as-is without checking its content type.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::HttpStatus`]: the server answered with a non-2xx status.
    /// - [`ScraperError::Connection`]: DNS failure or refused connection.
    /// - [`ScraperError::Timeout`]: no complete response within the timeout.
    /// - [`ScraperError::Request`]: any other transport failure.
    pub async fn fetch_page(&self, target: &Target) -> Result<String, ScraperError> {
        let url = target.url();
        tracing::info!(url, "fetching page");

        let result = self.send(target).await;
        if let Err(e) = &result {
            log_fetch_failure(e);
        }
        result
    }

    async fn send(&self, target: &Target) -> Result<String, ScraperError> {
        let url = target.url();
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, target.user_agent())
            .send()
            .await
            .map_err(|e| ScraperError::from_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ScraperError::from_transport(url, e))
    }
}

fn log_fetch_failure(err: &ScraperError) {
    match err {
        ScraperError::HttpStatus { status, url } => {
            tracing::error!(url, status, "HTTP error occurred");
        }
        ScraperError::Connection { url, source } => {
            tracing::error!(url, error = %source, "error connecting to target");
        }
        ScraperError::Timeout { url, source } => {
            tracing::error!(url, error = %source, "timeout error");
        }
        ScraperError::Request { url, source } => {
            tracing::error!(url, error = %source, "request error");
        }
        ScraperError::ClientBuild(source) => {
            tracing::error!(error = %source, "HTTP client error");
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
