//! Robots.txt handling module
//!
//! This module provides functionality for fetching robots.txt files, parsing
//! them, and evaluating user agents against the site root.

mod evaluator;
mod fetcher;
mod parser;

pub use evaluator::{evaluate_root_access, AgentVerdict, Evaluation};
pub use fetcher::{build_http_client, fetch_robots_txt, FetchOutcome};
pub use parser::ParsedRobots;
