// src/fetch/http.rs
// =============================================================================
// This module performs the one HTTP request the starter knows how to make.
//
// Key functionality:
// - Builds a reqwest client with a timeout and an identifying User-Agent
// - Sends a single GET to the sample target
// - Reports the status code and body size, whatever the status is
//
// Any status code counts as "we reached the server". Only transport
// failures (DNS, refused connection, timeout, TLS, truncated body) come back
// as errors.
// =============================================================================

use anyhow::{Context, Result};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Address used for the connectivity check.
pub const TARGET_URL: &str = "https://example.com";

/// Client-side timeout for the whole request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sent with every request so site owners can tell who is fetching.
pub const USER_AGENT: &str = "scraping-scripts/1.0";

// What we learned from one GET request
//
// Only the status code and the body length are kept; the body itself is
// dropped as soon as it has been counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    /// The URL that was requested
    pub url: Url,
    /// Numeric HTTP status code (100-599)
    pub status: u16,
    /// Length of the response body in bytes
    pub body_len: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fetched {}: status {}, {} bytes",
            self.url, self.status, self.body_len
        )
    }
}

/// Parses [`TARGET_URL`].
pub fn target_url() -> Result<Url> {
    Url::parse(TARGET_URL).with_context(|| format!("invalid target URL: {TARGET_URL}"))
}

// Creates the HTTP client used for the check
//
// Building a client can fail (e.g. the TLS backend can't initialise), so
// this returns a Result instead of panicking.
//
// Proxy variables (HTTP_PROXY, HTTPS_PROXY, NO_PROXY) are ignored: the
// request always goes straight to the target.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .no_proxy()
        .build()
        .context("failed to build HTTP client")
}

// Sends one GET request and summarises the response
//
// Parameters:
//   client: reqwest HTTP client (borrowed, we don't own it)
//   url: the address to fetch
//
// Returns: PageSummary for any response, Err for transport failures
pub async fn fetch_page(client: &Client, url: &Url) -> Result<PageSummary> {
    debug!(%url, "sending GET request");

    let mut response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("failed to fetch {url}"))?;

    let status = response.status();

    // Count the body chunk by chunk so the length is what the server
    // actually sent, not what Content-Length claimed.
    let mut body_len = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .with_context(|| format!("failed to read response body from {url}"))?
    {
        body_len += chunk.len();
    }

    info!(%url, status = status.as_u16(), bytes = body_len, "response received");

    Ok(PageSummary {
        url: url.clone(),
        status: status.as_u16(),
        body_len,
    })
}
