//! HTTP fetcher implementation
//!
//! This module handles the HTTP side of the crawl:
//! - Building the HTTP client with the configured user agent
//! - One GET per listing page, with no retries
//! - Classifying the response for the coordinator

use crate::config::HttpConfig;
use reqwest::Client;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The page was fetched
    Success {
        /// HTTP status code
        status_code: u16,
        /// Raw body; decoding is left to the page parser
        body: Vec<u8>,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, truncated body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns true if a body was received
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Builds an HTTP client with proper configuration
///
/// Timeouts are left at the client defaults.
///
/// # Example
///
/// ```no_run
/// use tap_reviews::config::HttpConfig;
/// use tap_reviews::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page
///
/// # Response handling
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | Success with the raw body |
/// | Other HTTP status | HttpError |
/// | Connection/timeout/body error | NetworkError |
///
/// No retries are made.
pub async fn fetch_page(client: &Client, url: &Url) -> FetchResult {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            return FetchResult::NetworkError { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    match response.bytes().await {
        Ok(body) => FetchResult::Success {
            status_code: status.as_u16(),
            body: body.to_vec(),
        },
        Err(e) => FetchResult::NetworkError {
            error: e.to_string(),
        },
    }
}
