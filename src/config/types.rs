use crate::checker::DEFAULT_AI_BOTS;
use serde::Deserialize;

/// Main configuration structure for Bot Block Checker
///
/// Every section is optional; a missing file or section yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub fetcher: FetcherConfig,
    pub bots: BotsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API listens on
    #[serde(rename = "bind-address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Outbound robots.txt fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum number of redirects followed
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every robots.txt request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 8,
            max_redirects: 10,
            user_agent: concat!(
                "bot-block-checker/",
                env!("CARGO_PKG_VERSION"),
                " (+https://github.com/bot-block-checker)"
            )
            .to_string(),
        }
    }
}

/// User agents checked when a request names none
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotsConfig {
    pub default: Vec<String>,
}

impl Default for BotsConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_AI_BOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
