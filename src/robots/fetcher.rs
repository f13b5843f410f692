//! HTTP fetcher for robots.txt
//!
//! This module handles the single outbound request made per check:
//! - Building the HTTP client with the configured user agent, timeout and
//!   redirect policy
//! - Classifying transport failures
//! - Separating "found" from "not found or empty" responses
//!
//! One attempt per check, no retries.

use crate::config::FetcherConfig;
use crate::FetchError;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;

/// Result of a successful round trip to the robots.txt URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// HTTP 200 with a non-empty body
    Found {
        /// HTTP status code
        status_code: u16,
        /// Raw robots.txt text
        body: String,
    },

    /// Any other status, or a 200 whose body is empty or whitespace
    NotFoundOrEmpty {
        /// HTTP status code
        status_code: u16,
    },
}

impl FetchOutcome {
    /// HTTP status code of the response
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Found { status_code, .. } | Self::NotFoundOrEmpty { status_code } => *status_code,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use bot_block_checker::config::FetcherConfig;
/// use bot_block_checker::robots::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a robots.txt URL
///
/// # Outcome Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200, non-blank body | `Ok(Found)` |
/// | HTTP 200, blank body | `Ok(NotFoundOrEmpty)` |
/// | Any other status | `Ok(NotFoundOrEmpty)` |
/// | Timeout | `Err(Timeout)` |
/// | DNS failure, connection refused, TLS error | `Err(Connect)` |
/// | Redirect chain over the limit | `Err(TooManyRedirects)` |
/// | Body could not be read | `Err(Body)` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The robots.txt URL to fetch
pub async fn fetch_robots_txt(client: &Client, url: &str) -> Result<FetchOutcome, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    tracing::debug!("GET {} -> {}", url, status);

    if status != StatusCode::OK {
        return Ok(FetchOutcome::NotFoundOrEmpty {
            status_code: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    })?;

    if body.trim().is_empty() {
        return Ok(FetchOutcome::NotFoundOrEmpty {
            status_code: status.as_u16(),
        });
    }

    Ok(FetchOutcome::Found {
        status_code: status.as_u16(),
        body,
    })
}

/// Maps a reqwest error onto a fetch failure class
fn classify_error(url: &str, e: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if e.is_timeout() {
        FetchError::Timeout { url }
    } else if e.is_connect() {
        FetchError::Connect { url }
    } else if e.is_redirect() {
        FetchError::TooManyRedirects { url }
    } else if e.is_builder() {
        FetchError::InvalidUrl(crate::UrlError::Parse(e.to_string()))
    } else {
        FetchError::Request {
            url,
            message: e.to_string(),
        }
    }
}
