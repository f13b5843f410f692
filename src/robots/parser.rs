//! Robots.txt parser implementation
//!
//! Permission checks are delegated to the robotstxt crate (Google's matcher).
//! This module adds a lint pass over the raw text and a `Crawl-delay` lookup,
//! which the matcher does not expose.

use robotstxt::DefaultMatcher;

/// Parsed robots.txt data
///
/// Holds the raw robots.txt text along with any warnings found while
/// scanning it. Malformed lines never make parsing fail; they are skipped
/// and reported through [`ParsedRobots::warnings`].
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    /// Raw robots.txt content
    content: String,
    /// Number of lines that were not blank, comments, or directives
    malformed_lines: usize,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    ///
    /// # Arguments
    ///
    /// * `content` - The raw robots.txt file content
    ///
    /// # Returns
    ///
    /// A ParsedRobots instance that can be used to check URL permissions
    pub fn from_content(content: &str) -> Self {
        let malformed_lines = content
            .lines()
            .map(strip_comment)
            .filter(|line| is_malformed(line))
            .count();

        Self {
            content: content.to_string(),
            malformed_lines,
        }
    }

    /// Returns the warnings collected while parsing
    pub fn warnings(&self) -> Vec<String> {
        if self.malformed_lines == 0 {
            return Vec::new();
        }
        vec![format!(
            "Parse warning: {} malformed line(s) ignored",
            self.malformed_lines
        )]
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// Only the product token of `user_agent` is matched, so `GPTBot/1.2`
    /// is governed by a `User-agent: GPTBot` group.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to check (a full URL or a path such as "/page.html")
    /// * `user_agent` - The user agent string
    ///
    /// # Returns
    ///
    /// * `true` - If the URL is allowed
    /// * `false` - If the URL is disallowed
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.content.trim().is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, product_name(user_agent), url)
    }

    /// Gets the crawl delay that applies to a specific user agent
    ///
    /// Once any group names the agent, only the agent's groups apply and the
    /// `*` group is ignored, even when the agent's groups carry no delay.
    /// Agent names compare case-insensitively on the product token, so
    /// `GPTBot/1.2` matches a `User-agent: gptbot` group. Delays that are
    /// negative or not finite are skipped.
    ///
    /// # Returns
    ///
    /// * `Some(f64)` - The crawl delay in seconds
    /// * `None` - If no crawl delay is specified
    pub fn crawl_delay(&self, user_agent: &str) -> Option<f64> {
        if self.content.trim().is_empty() {
            return None;
        }

        let token = product_token(user_agent);

        let mut group_agents: Vec<String> = Vec::new();
        let mut in_rules = false;
        let mut agent_group_seen = false;
        let mut delay_for_wildcard: Option<f64> = None;
        let mut delay_for_agent: Option<f64> = None;

        for line in self.content.lines() {
            let line = strip_comment(line);
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim();

            match key.as_str() {
                "user-agent" => {
                    // A user-agent line after rules opens a new group
                    if in_rules {
                        group_agents.clear();
                        in_rules = false;
                    }
                    let agent = product_token(value);
                    agent_group_seen |= agent == token;
                    group_agents.push(agent);
                }
                "crawl-delay" => {
                    in_rules = true;
                    let Some(delay) = parse_delay(value) else {
                        continue;
                    };
                    if group_agents.iter().any(|ua| *ua == token) {
                        delay_for_agent.get_or_insert(delay);
                    } else if group_agents.iter().any(|ua| ua == "*") {
                        delay_for_wildcard.get_or_insert(delay);
                    }
                }
                _ => in_rules = true,
            }
        }

        if agent_group_seen {
            delay_for_agent
        } else {
            delay_for_wildcard
        }
    }
}

/// Directives the matcher accepts without a colon, e.g. `Disallow /`
const KNOWN_DIRECTIVES: &[&str] = &["user-agent", "allow", "disallow", "sitemap", "crawl-delay"];

/// A non-blank line that is neither `key: value` nor `directive value`
fn is_malformed(line: &str) -> bool {
    if line.is_empty() || line.contains(':') {
        return false;
    }
    let mut parts = line.split_whitespace();
    let key = parts.next().unwrap_or_default().to_lowercase();
    !(KNOWN_DIRECTIVES.contains(&key.as_str()) && parts.next().is_some())
}

/// Removes a trailing `#` comment and surrounding whitespace
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => line[..idx].trim(),
        None => line.trim(),
    }
}

/// User-agent name without its version suffix
fn product_name(user_agent: &str) -> &str {
    user_agent.split('/').next().unwrap_or_default().trim()
}

/// Lowercased [`product_name`], used to compare group agents
fn product_token(user_agent: &str) -> String {
    product_name(user_agent).to_lowercase()
}

/// A `Crawl-delay` value in seconds; finite and non-negative only
fn parse_delay(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|delay| delay.is_finite() && *delay >= 0.0)
}
