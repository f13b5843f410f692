//! Per-agent evaluation of robots.txt rules against the site root

use crate::robots::ParsedRobots;
use std::panic::{self, AssertUnwindSafe};

/// What robots.txt says about one user agent
#[derive(Debug, Clone, PartialEq)]
pub struct AgentVerdict {
    /// The user agent that was evaluated
    pub user_agent: String,
    /// Whether the agent may fetch `origin/`
    pub can_fetch_root: bool,
    /// Crawl delay in seconds, if robots.txt sets one for this agent
    pub crawl_delay: Option<f64>,
}

/// Outcome of evaluating a list of agents
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    /// One verdict per requested agent, in request order
    pub verdicts: Vec<AgentVerdict>,
    /// Parse warnings, including any raised by the matcher
    pub warnings: Vec<String>,
}

/// Evaluates each user agent's permission to fetch the site root
///
/// Evaluation never fails. If the matcher panics on pathological input the
/// panic is contained, a single warning is recorded and the agent is treated
/// as allowed, the same answer an empty rule set gives.
///
/// # Arguments
///
/// * `robots` - Parsed robots.txt
/// * `origin` - Site origin, `scheme://host[:port]`
/// * `agents` - User agents to evaluate, in request order
pub fn evaluate_root_access(robots: &ParsedRobots, origin: &str, agents: &[String]) -> Evaluation {
    let root = format!("{}/", origin.trim_end_matches('/'));
    evaluate_with(robots, agents, |agent| robots.is_allowed(&root, agent))
}

/// Runs `is_allowed` for every agent, containing any panic it raises
fn evaluate_with<F>(robots: &ParsedRobots, agents: &[String], is_allowed: F) -> Evaluation
where
    F: Fn(&str) -> bool,
{
    let mut warnings = robots.warnings();
    let mut matcher_panicked = false;

    let verdicts = agents
        .iter()
        .map(|agent| {
            let can_fetch_root = match contained(|| is_allowed(agent)) {
                Some(allowed) => allowed,
                None => {
                    tracing::warn!("robots.txt matcher panicked for agent {}", agent);
                    matcher_panicked = true;
                    true
                }
            };

            AgentVerdict {
                user_agent: agent.clone(),
                can_fetch_root,
                crawl_delay: robots.crawl_delay(agent),
            }
        })
        .collect();

    if matcher_panicked {
        warnings.push("Parse warning: MatcherPanic".to_string());
    }

    Evaluation { verdicts, warnings }
}

/// Runs `check`, returning `None` if it panicked
fn contained<F: FnOnce() -> bool>(check: F) -> Option<bool> {
    panic::catch_unwind(AssertUnwindSafe(check)).ok()
}
