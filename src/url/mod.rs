//! URL handling module for Bot Block Checker
//!
//! This module reduces user-supplied URLs to their origin and derives the
//! robots.txt location from it.

mod normalize;

// Re-export main functions
pub use normalize::{normalize_to_origin, robots_url};

/// Resolves user input to an `(origin, robots_url)` pair
///
/// When the input cannot be normalized, a best-effort robots.txt URL is
/// still produced from the raw input's authority, with any path, query or
/// fragment dropped, so callers can report what was attempted.
///
/// # Examples
///
/// ```
/// use bot_block_checker::url::resolve;
///
/// let (origin, robots) = resolve("example.com/page");
/// assert_eq!(origin.unwrap(), "https://example.com");
/// assert_eq!(robots, "https://example.com/robots.txt");
/// ```
pub fn resolve(input: &str) -> (crate::UrlResult<String>, String) {
    match normalize_to_origin(input) {
        Ok(origin) => {
            let robots = robots_url(&origin);
            (Ok(origin), robots)
        }
        Err(e) => {
            let robots = robots_url(raw_origin(input.trim()));
            (Err(e), robots)
        }
    }
}

/// Leading `[scheme://]authority` part of unparseable input
fn raw_origin(input: &str) -> &str {
    let start = normalize::scheme_end(input).unwrap_or(0);
    match input[start..].find(|c: char| matches!(c, '/' | '?' | '#')) {
        Some(end) => &input[..start + end],
        None => input,
    }
}
