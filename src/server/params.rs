//! Query-string validation for `GET /check`
//!
//! `bots` may repeat, which serde's urlencoded deserializer cannot express,
//! so the query is walked pair by pair.

use crate::checker::CheckRequest;
use std::fmt;

/// Validated `/check` query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckParams {
    pub url: String,
    /// Explicitly requested agents; empty means "use the defaults"
    pub bots: Vec<String>,
    pub include_robots_txt: bool,
}

/// Reason a query string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    MissingUrl,
    InvalidBool { name: &'static str, value: String },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUrl => write!(f, "query parameter 'url' is required"),
            Self::InvalidBool { name, value } => write!(
                f,
                "query parameter '{}' must be a boolean, got '{}'",
                name, value
            ),
        }
    }
}

impl std::error::Error for ParamError {}

impl CheckParams {
    /// Parses and validates a raw query string
    ///
    /// # Rules
    ///
    /// - `url` is required and must not be blank; the last occurrence wins
    /// - `bots` may repeat; blank values are dropped
    /// - `includeRobotsTxt` defaults to true
    /// - Unknown parameters are ignored
    pub fn from_query(query: &str) -> Result<Self, ParamError> {
        let mut url: Option<String> = None;
        let mut bots = Vec::new();
        let mut include_robots_txt = true;

        for (key, value) in ::url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "url" => url = Some(value.into_owned()),
                "bots" => {
                    let bot = value.trim();
                    if !bot.is_empty() {
                        bots.push(bot.to_string());
                    }
                }
                "includeRobotsTxt" => {
                    include_robots_txt =
                        parse_bool(&value).ok_or_else(|| ParamError::InvalidBool {
                            name: "includeRobotsTxt",
                            value: value.into_owned(),
                        })?;
                }
                _ => {}
            }
        }

        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ParamError::MissingUrl)?;

        Ok(Self {
            url,
            bots,
            include_robots_txt,
        })
    }

    /// Converts the parameters into a check request
    ///
    /// `default_bots` is copied in when no bots were requested.
    pub fn into_request(self, default_bots: &[String]) -> CheckRequest {
        let bots = if self.bots.is_empty() {
            default_bots.to_vec()
        } else {
            self.bots
        };

        CheckRequest::new(self.url)
            .with_bots(bots)
            .include_robots_txt(self.include_robots_txt)
    }
}

/// Lenient boolean parsing for query values
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}
