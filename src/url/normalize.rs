use crate::{UrlError, UrlResult};
use url::Url;

/// Scheme assumed when the input does not carry one
const DEFAULT_SCHEME: &str = "https";

/// Reduces any URL or bare host to its origin
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Default the scheme to `https` when none is present:
///    - `example.com` and `example.com/some/page` are treated as hosts
///    - scheme-relative `//example.com` gets `https:` prepended
/// 3. Parse the URL; reject if malformed
/// 4. Reject anything that is not HTTP or HTTPS, or has no host
/// 5. Drop path, query, fragment and userinfo; the host is lowercased and
///    default ports are elided
///
/// # Arguments
///
/// * `input` - A URL or bare hostname
///
/// # Returns
///
/// * `Ok(String)` - The origin, `scheme://host[:port]`, without a trailing slash
/// * `Err(UrlError)` - The input could not be reduced to an HTTP(S) origin
///
/// # Examples
///
/// ```
/// use bot_block_checker::url::normalize_to_origin;
///
/// assert_eq!(normalize_to_origin("example.com").unwrap(), "https://example.com");
/// assert_eq!(
///     normalize_to_origin("http://Example.com:8080/a/b?q=1#top").unwrap(),
///     "http://example.com:8080"
/// );
/// ```
pub fn normalize_to_origin(input: &str) -> UrlResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::MissingHost);
    }

    let url = Url::parse(&with_scheme(trimmed)).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlError::MissingHost),
    }

    // Tuple origins serialize as scheme://host[:port] with no trailing slash
    Ok(url.origin().ascii_serialization())
}

/// Builds the robots.txt URL for an origin
///
/// A trailing slash on the origin is stripped before `/robots.txt` is appended.
pub fn robots_url(origin: &str) -> String {
    format!("{}/robots.txt", origin.trim_end_matches('/'))
}

/// Byte offset just past the `://` of a leading scheme, if the input has one
///
/// A `://` that only appears after the first `/`, `?` or `#` belongs to the
/// path, query or fragment, not to a scheme.
pub(crate) fn scheme_end(input: &str) -> Option<usize> {
    let sep = input.find("://")?;
    match input.find(|c: char| matches!(c, '/' | '?' | '#')) {
        Some(delim) if delim < sep => None,
        _ => Some(sep + 3),
    }
}

/// Prepends the default scheme when the input has none
fn with_scheme(input: &str) -> String {
    if scheme_end(input).is_some() {
        input.to_string()
    } else if let Some(rest) = input.strip_prefix("//") {
        format!("{}://{}", DEFAULT_SCHEME, rest)
    } else {
        format!("{}://{}", DEFAULT_SCHEME, input)
    }
}
