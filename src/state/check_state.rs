//! Check state definitions for tracking a single request
//!
//! A check moves through these states exactly once; nothing survives the request.
use std::fmt;

/// Represents the current state of a robots.txt check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckState {
    // ===== Active States =====
    /// Request received, nothing fetched yet
    Start,

    /// robots.txt request in flight
    Fetching,

    /// robots.txt body is being parsed
    Parsing,

    // ===== Fetch Outcomes =====
    /// Transport failure, timeout, or unusable URL
    FetchFailed,

    /// Non-200 status or empty body
    NotFound,

    /// HTTP 200 with a non-empty body
    Found,

    /// Every requested agent has a verdict
    Evaluated,

    // ===== Terminal State =====
    /// Response assembled
    Responded,
}

impl CheckState {
    /// Returns true if no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Responded)
    }

    /// Returns true if moving from `self` to `next` is a legal step
    ///
    /// ```text
    /// Start -> Fetching -> {FetchFailed | NotFound | Found}
    /// Found -> Parsing -> Evaluated
    /// {FetchFailed | NotFound | Evaluated} -> Responded
    /// ```
    ///
    /// An unusable URL short-circuits `Start -> FetchFailed`.
    pub fn can_transition_to(&self, next: CheckState) -> bool {
        use CheckState::*;
        matches!(
            (*self, next),
            (Start, Fetching)
                | (Start, FetchFailed)
                | (Fetching, FetchFailed)
                | (Fetching, NotFound)
                | (Fetching, Found)
                | (Found, Parsing)
                | (Parsing, Evaluated)
                | (FetchFailed, Responded)
                | (NotFound, Responded)
                | (Evaluated, Responded)
        )
    }

    /// Lowercase name used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Fetching => "fetching",
            Self::Parsing => "parsing",
            Self::FetchFailed => "fetch_failed",
            Self::NotFound => "not_found",
            Self::Found => "found",
            Self::Evaluated => "evaluated",
            Self::Responded => "responded",
        }
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
