//! Checker module: the request handler behind `GET /check`
//!
//! A check runs four steps:
//! - Normalize the URL to its origin
//! - Fetch `{origin}/robots.txt`
//! - Evaluate each requested user agent against `{origin}/`
//! - Assemble the response
//!
//! Every failure is folded into the response body; `check` cannot fail.

pub mod assembler;
mod types;

pub use types::{BotResult, CheckRequest, CheckResponse, DEFAULT_AI_BOTS};

use crate::config::FetcherConfig;
use crate::robots::{build_http_client, evaluate_root_access, fetch_robots_txt, FetchOutcome, ParsedRobots};
use crate::state::CheckState;
use crate::FetchError;
use reqwest::Client;

/// Stateless robots.txt checker
///
/// Holds only the pooled HTTP client, so it is cheap to clone and safe to
/// share between concurrent requests.
#[derive(Debug, Clone)]
pub struct RobotsChecker {
    client: Client,
}

impl RobotsChecker {
    /// Creates a checker whose client follows the fetcher configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Creates a checker around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Runs a check
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bot_block_checker::config::FetcherConfig;
    /// use bot_block_checker::{CheckRequest, RobotsChecker};
    ///
    /// # async fn example() {
    /// let checker = RobotsChecker::new(&FetcherConfig::default()).unwrap();
    /// let response = checker.check(&CheckRequest::new("example.com")).await;
    /// println!("blocked: {:?}", response.blocked_bots);
    /// # }
    /// ```
    pub async fn check(&self, request: &CheckRequest) -> CheckResponse {
        let mut state = CheckState::Start;
        let (origin, robots_url) = crate::url::resolve(&request.url);

        let origin = match origin {
            Ok(origin) => origin,
            Err(e) => {
                tracing::warn!("Rejected URL '{}': {}", request.url, e);
                advance(&mut state, CheckState::FetchFailed);
                let response = assembler::fetch_failed(&robots_url, &FetchError::InvalidUrl(e));
                advance(&mut state, CheckState::Responded);
                return response;
            }
        };

        advance(&mut state, CheckState::Fetching);
        let response = match fetch_robots_txt(&self.client, &robots_url).await {
            Err(e) => {
                tracing::warn!("Fetch of {} failed: {}", robots_url, e);
                advance(&mut state, CheckState::FetchFailed);
                assembler::fetch_failed(&robots_url, &e)
            }
            Ok(FetchOutcome::NotFoundOrEmpty { status_code }) => {
                tracing::info!("No robots.txt at {} (status {})", robots_url, status_code);
                advance(&mut state, CheckState::NotFound);
                assembler::not_found(&robots_url, status_code)
            }
            Ok(FetchOutcome::Found { status_code, body }) => {
                advance(&mut state, CheckState::Found);

                advance(&mut state, CheckState::Parsing);
                let robots = ParsedRobots::from_content(&body);
                let evaluation = evaluate_root_access(&robots, &origin, &request.bots);
                advance(&mut state, CheckState::Evaluated);

                for warning in &evaluation.warnings {
                    tracing::warn!("{}: {}", robots_url, warning);
                }

                let response = assembler::found(
                    &robots_url,
                    status_code,
                    body,
                    evaluation,
                    request.include_robots_txt,
                );
                tracing::info!(
                    "Checked {} for {} agent(s), blocked: {:?}",
                    origin,
                    request.bots.len(),
                    response.blocked_bots
                );
                response
            }
        };

        advance(&mut state, CheckState::Responded);
        response
    }
}

/// Moves the check to its next state
fn advance(state: &mut CheckState, next: CheckState) {
    debug_assert!(
        state.can_transition_to(next),
        "Invalid state transition: {} -> {}",
        state,
        next
    );
    tracing::trace!("check state {} -> {}", state, next);
    *state = next;
}
