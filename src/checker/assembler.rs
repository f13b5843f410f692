//! Builds `CheckResponse` values from fetch outcomes and agent verdicts

use crate::checker::types::{BotResult, CheckResponse};
use crate::robots::{AgentVerdict, Evaluation};
use crate::FetchError;

/// Response for a fetch that never produced an HTTP status
pub fn fetch_failed(robots_url: &str, error: &FetchError) -> CheckResponse {
    CheckResponse {
        robots_txt_found: false,
        robots_url: robots_url.to_string(),
        status_code: None,
        blocked_bots: Vec::new(),
        results: Vec::new(),
        robots_txt: None,
        warnings: vec![error.warning()],
    }
}

/// Response for a non-200 status or an empty robots.txt
pub fn not_found(robots_url: &str, status_code: u16) -> CheckResponse {
    CheckResponse {
        robots_txt_found: false,
        robots_url: robots_url.to_string(),
        status_code: Some(status_code),
        blocked_bots: Vec::new(),
        results: Vec::new(),
        robots_txt: None,
        warnings: Vec::new(),
    }
}

/// Response for a robots.txt that was fetched and evaluated
///
/// `robots_txt` is only echoed back when `include_robots_txt` is set.
pub fn found(
    robots_url: &str,
    status_code: u16,
    robots_txt: String,
    evaluation: Evaluation,
    include_robots_txt: bool,
) -> CheckResponse {
    let results: Vec<BotResult> = evaluation.verdicts.into_iter().map(bot_result).collect();

    CheckResponse {
        robots_txt_found: true,
        robots_url: robots_url.to_string(),
        status_code: Some(status_code),
        blocked_bots: blocked_bots(&results),
        results,
        robots_txt: include_robots_txt.then_some(robots_txt),
        warnings: evaluation.warnings,
    }
}

/// User agents that may not fetch the root, in result order
pub fn blocked_bots(results: &[BotResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| !r.can_fetch_root)
        .map(|r| r.user_agent.clone())
        .collect()
}

fn bot_result(verdict: AgentVerdict) -> BotResult {
    BotResult {
        user_agent: verdict.user_agent,
        can_fetch_root: verdict.can_fetch_root,
        can_fetch_sitewide: verdict.can_fetch_root,
        notes: verdict
            .crawl_delay
            .map(|delay| format!("Crawl-delay: {}s", delay)),
    }
}
