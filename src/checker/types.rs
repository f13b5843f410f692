use serde::{Deserialize, Serialize};

/// User agents checked when a request does not name any
pub const DEFAULT_AI_BOTS: &[&str] = &[
    "GPTBot",          // OpenAI
    "PerplexityBot",   // Perplexity
    "ClaudeBot",       // Anthropic
    "CCBot",           // Common Crawl
    "Google-Extended", // Google AI training opt-out
    "Amazonbot",       // Amazon
];

/// A validated check request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    /// Any URL on the target site, or a bare host
    pub url: String,
    /// User agents to evaluate, in the order results should be reported
    pub bots: Vec<String>,
    /// Whether the raw robots.txt text is echoed back
    pub include_robots_txt: bool,
}

impl CheckRequest {
    /// Creates a request for `url` against the default AI bot list
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            bots: DEFAULT_AI_BOTS.iter().map(|s| s.to_string()).collect(),
            include_robots_txt: true,
        }
    }

    /// Replaces the bot list
    pub fn with_bots<I, S>(mut self, bots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bots = bots.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether the raw robots.txt text is returned
    pub fn include_robots_txt(mut self, include: bool) -> Self {
        self.include_robots_txt = include;
        self
    }
}

/// Verdict for one user agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotResult {
    pub user_agent: String,
    pub can_fetch_root: bool,
    /// Always equal to `can_fetch_root`; a root block stands in for a sitewide block
    pub can_fetch_sitewide: bool,
    pub notes: Option<String>,
}

/// Response body of `GET /check`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub robots_txt_found: bool,
    pub robots_url: String,
    pub status_code: Option<u16>,
    pub blocked_bots: Vec<String>,
    pub results: Vec<BotResult>,
    pub robots_txt: Option<String>,
    pub warnings: Vec<String>,
}
