//! Bot Block Checker: robots.txt permissions for AI crawlers
//!
//! This crate fetches a site's robots.txt and reports, for a list of AI-crawler
//! user agents, whether each one may fetch the site root.

pub mod checker;
pub mod config;
pub mod robots;
pub mod server;
pub mod state;
pub mod url;

use thiserror::Error;

/// Errors that stop the service from starting or serving
///
/// Per-check failures never surface here; they become response warnings.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Transport-level failures while fetching robots.txt
///
/// Each variant is one failure class; [`FetchError::class`] is the name
/// surfaced to API callers in the `warnings` list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("could not connect to {url}")]
    Connect { url: String },

    #[error("too many redirects from {url}")]
    TooManyRedirects { url: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),

    #[error("failed to read body from {url}: {message}")]
    Body { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
}

impl FetchError {
    /// Short, stable name of the failure class
    pub fn class(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "Timeout",
            Self::Connect { .. } => "ConnectError",
            Self::TooManyRedirects { .. } => "TooManyRedirects",
            Self::InvalidUrl(_) => "InvalidUrl",
            Self::Body { .. } => "BodyError",
            Self::Request { .. } => "RequestError",
        }
    }

    /// Warning text reported in a check response
    pub fn warning(&self) -> String {
        format!("Fetch error: {}", self.class())
    }
}

/// Result type alias for Bot Block Checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use checker::{BotResult, CheckRequest, CheckResponse, RobotsChecker, DEFAULT_AI_BOTS};
pub use config::Config;
pub use state::CheckState;
pub use crate::url::{normalize_to_origin, robots_url};
