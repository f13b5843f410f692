//! Integration tests for the checker
//!
//! These tests use wiremock to serve robots.txt and exercise the full
//! normalize → fetch → evaluate → assemble cycle.

use bot_block_checker::config::FetcherConfig;
use bot_block_checker::{CheckRequest, RobotsChecker, DEFAULT_AI_BOTS};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a checker with a short timeout suitable for tests
fn create_test_checker(timeout_secs: u64) -> RobotsChecker {
    let config = FetcherConfig {
        timeout_secs,
        max_redirects: 5,
        user_agent: "TestChecker/1.0".to_string(),
    };
    RobotsChecker::new(&config).expect("Failed to build checker")
}

/// Starts a mock server answering /robots.txt with the given status and body
async fn serve_robots(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_specific_agent_blocked() {
    let mock_server = serve_robots(200, "User-agent: GPTBot\nDisallow: /").await;
    let checker = create_test_checker(5);

    let request = CheckRequest::new(mock_server.uri()).with_bots(["GPTBot"]);
    let response = checker.check(&request).await;

    assert!(response.robots_txt_found);
    assert_eq!(response.robots_url, format!("{}/robots.txt", mock_server.uri()));
    assert_eq!(response.status_code, Some(200));
    assert_eq!(response.blocked_bots, vec!["GPTBot"]);
    assert_eq!(response.results.len(), 1);
    assert!(!response.results[0].can_fetch_root);
    assert!(!response.results[0].can_fetch_sitewide);
    assert!(response.warnings.is_empty());
}

#[tokio::test]
async fn test_wildcard_allow_permits_everyone() {
    let mock_server = serve_robots(200, "User-agent: *\nAllow: /").await;
    let checker = create_test_checker(5);

    let request = CheckRequest::new(mock_server.uri()).with_bots(["GPTBot", "ClaudeBot"]);
    let response = checker.check(&request).await;

    assert!(response.robots_txt_found);
    assert!(response.blocked_bots.is_empty());
    assert_eq!(response.results.len(), 2);
    assert!(response.results.iter().all(|r| r.can_fetch_root));
}

#[tokio::test]
async fn test_default_bots_order_and_blocked_subset() {
    let body = "User-agent: CCBot\nDisallow: /\n\nUser-agent: Amazonbot\nDisallow: /\n\nUser-agent: *\nAllow: /";
    let mock_server = serve_robots(200, body).await;
    let checker = create_test_checker(5);

    let response = checker.check(&CheckRequest::new(mock_server.uri())).await;

    let agents: Vec<&str> = response
        .results
        .iter()
        .map(|r| r.user_agent.as_str())
        .collect();
    assert_eq!(agents, DEFAULT_AI_BOTS.to_vec());
    assert_eq!(response.blocked_bots, vec!["CCBot", "Amazonbot"]);

    let expected: Vec<String> = response
        .results
        .iter()
        .filter(|r| !r.can_fetch_root)
        .map(|r| r.user_agent.clone())
        .collect();
    assert_eq!(response.blocked_bots, expected);
}

#[tokio::test]
async fn test_robots_txt_echo_toggle() {
    let body = "User-agent: *\nDisallow: /private";
    let mock_server = serve_robots(200, body).await;
    let checker = create_test_checker(5);

    let with_text = checker.check(&CheckRequest::new(mock_server.uri())).await;
    assert_eq!(with_text.robots_txt.as_deref(), Some(body));

    let without_text = checker
        .check(&CheckRequest::new(mock_server.uri()).include_robots_txt(false))
        .await;
    assert!(without_text.robots_txt_found);
    assert_eq!(without_text.robots_txt, None);
}

#[tokio::test]
async fn test_not_found_preserves_status() {
    let mock_server = serve_robots(404, "Not Found").await;
    let checker = create_test_checker(5);

    let response = checker.check(&CheckRequest::new(mock_server.uri())).await;

    assert!(!response.robots_txt_found);
    assert_eq!(response.status_code, Some(404));
    assert!(response.results.is_empty());
    assert!(response.blocked_bots.is_empty());
    assert_eq!(response.robots_txt, None);
    assert!(response.warnings.is_empty());
}

#[tokio::test]
async fn test_server_error_is_not_found() {
    let mock_server = serve_robots(503, "").await;
    let checker = create_test_checker(5);

    let response = checker.check(&CheckRequest::new(mock_server.uri())).await;

    assert!(!response.robots_txt_found);
    assert_eq!(response.status_code, Some(503));
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_empty_body_is_not_found() {
    let mock_server = serve_robots(200, "  \n\n ").await;
    let checker = create_test_checker(5);

    let response = checker.check(&CheckRequest::new(mock_server.uri())).await;

    assert!(!response.robots_txt_found);
    assert_eq!(response.status_code, Some(200));
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_timeout_reports_single_warning() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nDisallow: /")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;
    let checker = create_test_checker(1);

    let response = checker.check(&CheckRequest::new(mock_server.uri())).await;

    assert!(!response.robots_txt_found);
    assert_eq!(response.status_code, None);
    assert!(response.results.is_empty());
    assert_eq!(response.warnings, vec!["Fetch error: Timeout"]);
}

#[tokio::test]
async fn test_connection_refused_reports_single_warning() {
    let checker = create_test_checker(5);

    // Port 1 is reserved and not listening on test hosts
    let response = checker
        .check(&CheckRequest::new("http://127.0.0.1:1"))
        .await;

    assert!(!response.robots_txt_found);
    assert_eq!(response.robots_url, "http://127.0.0.1:1/robots.txt");
    assert_eq!(response.status_code, None);
    assert!(response.results.is_empty());
    assert_eq!(response.warnings.len(), 1);
    assert!(response.warnings[0].starts_with("Fetch error: "));
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/moved/robots.txt"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/moved/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: ClaudeBot\nDisallow: /"))
        .mount(&mock_server)
        .await;
    let checker = create_test_checker(5);

    let request = CheckRequest::new(mock_server.uri()).with_bots(["ClaudeBot", "GPTBot"]);
    let response = checker.check(&request).await;

    assert!(response.robots_txt_found);
    assert_eq!(response.robots_url, format!("{}/robots.txt", mock_server.uri()));
    assert_eq!(response.blocked_bots, vec!["ClaudeBot"]);
}

#[tokio::test]
async fn test_redirect_loop_reports_warning() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/robots.txt"))
        .mount(&mock_server)
        .await;
    let checker = create_test_checker(5);

    let response = checker.check(&CheckRequest::new(mock_server.uri())).await;

    assert!(!response.robots_txt_found);
    assert_eq!(response.status_code, None);
    assert_eq!(response.warnings, vec!["Fetch error: TooManyRedirects"]);
}

#[tokio::test]
async fn test_malformed_lines_warn_but_evaluate() {
    let body = "this line is garbage\nUser-agent: GPTBot\nDisallow: /";
    let mock_server = serve_robots(200, body).await;
    let checker = create_test_checker(5);

    let request = CheckRequest::new(mock_server.uri()).with_bots(["GPTBot", "CCBot"]);
    let response = checker.check(&request).await;

    assert!(response.robots_txt_found);
    assert_eq!(response.blocked_bots, vec!["GPTBot"]);
    assert_eq!(
        response.warnings,
        vec!["Parse warning: 1 malformed line(s) ignored"]
    );
}

#[tokio::test]
async fn test_url_path_is_reduced_to_origin() {
    let mock_server = serve_robots(200, "User-agent: *\nDisallow: /").await;
    let checker = create_test_checker(5);

    let request = CheckRequest::new(format!("{}/deep/page.html?q=1#top", mock_server.uri()))
        .with_bots(["GPTBot"]);
    let response = checker.check(&request).await;

    assert_eq!(response.robots_url, format!("{}/robots.txt", mock_server.uri()));
    assert_eq!(response.blocked_bots, vec!["GPTBot"]);
}

#[tokio::test]
async fn test_repeated_checks_are_identical() {
    let mock_server = serve_robots(200, "User-agent: GPTBot\nCrawl-delay: 4\nDisallow: /").await;
    let checker = create_test_checker(5);
    let request = CheckRequest::new(mock_server.uri());

    let first = checker.check(&request).await;
    let second = checker.check(&request).await;

    assert_eq!(first, second);
    assert_eq!(first.results[0].notes.as_deref(), Some("Crawl-delay: 4s"));
}
