//! End-to-end submission workflow tests against a wiremock backend.
//!
//! The app under test runs without a terminal: tests invoke the same named
//! transitions the key handlers use, then drain and apply the async messages
//! the spawned tasks produce.

use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tinyurl_tui::app::{App, AppMessage, Focus};
use tinyurl_tui::config::Config;

fn shorten_payload() -> serde_json::Value {
    json!({
        "short_url": "http://sho.rt/abc123",
        "short_code": "abc123",
        "original_url": "https://example.com/a/b",
        "attempts": 1,
        "cached": false,
        "collision_detected": false,
        "strategy_used": null
    })
}

fn stats_payload() -> serde_json::Value {
    json!({
        "hash_map": {
            "size": 1, "capacity": 64, "load_factor": 0.02,
            "collision_count": 0, "avg_chain_length": 1.0,
            "max_chain_length": 1, "non_empty_buckets": 1
        },
        "lru_cache": {
            "size": 1, "capacity": 100, "hit_rate": 0.0,
            "hits": 0, "misses": 1, "evictions": 0, "utilization": 1.0
        },
        "trie": {"total_urls": 1, "total_nodes": 6, "avg_nodes_per_url": 6.0},
        "collision_detector": {
            "total_collisions": 0, "linear_probing_used": 0,
            "linear_probing_percentage": 0.0, "regeneration_used": 0,
            "regeneration_percentage": 0.0, "max_attempts": 0
        }
    })
}

fn top_payload() -> serde_json::Value {
    json!({
        "top_urls": [
            {"id": 1, "short_code": "abc123", "original_url": "https://example.com/a/b",
             "clicks": 0, "created_at": "2025-06-01T00:00:00Z",
             "collision_resolved": false, "resolution_strategy": null}
        ]
    })
}

/// App wired to the mock server, with the refresh delay shrunk so tests run
/// fast, plus the taken message receiver.
fn test_app(server: &MockServer) -> (App, UnboundedReceiver<AppMessage>) {
    let config = Config::default()
        .with_base_url(server.uri())
        .with_post_submit_refresh(Duration::from_millis(10))
        .with_copy_feedback_timeout(Duration::from_millis(10));
    let mut app = App::new(config);
    let rx = app.message_rx.take().expect("receiver available");
    (app, rx)
}

async fn recv(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for message")
        .expect("message channel closed")
}

#[tokio::test]
async fn test_successful_submit_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shorten_payload()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_payload()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/top"))
        .respond_with(ResponseTemplate::new(200).set_body_json(top_payload()))
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server);
    app.url_input = "https://example.com/a/b".to_string();
    app.submit();

    // In flight: cleared projections, guarded entry point.
    assert!(app.submitting);
    assert!(app.submit_result.is_none());
    assert!(app.submit_error.is_none());

    let msg = recv(&mut rx).await;
    assert!(matches!(msg, AppMessage::ShortenCompleted(_)));
    app.handle_message(msg);

    // Completed: exactly one of result/error, input cleared, focus moved.
    assert!(!app.submitting);
    let result = app.submit_result.as_ref().expect("result stored");
    assert_eq!(result.short_url, "http://sho.rt/abc123");
    assert_eq!(result.attempts, 1);
    assert!(!result.collision_detected);
    assert!(app.submit_error.is_none());
    assert!(app.url_input.is_empty());
    assert_eq!(app.focus, Focus::Result);

    // The settle delay elapses and triggers both refreshes.
    let msg = recv(&mut rx).await;
    assert!(matches!(msg, AppMessage::RefreshDue));
    app.handle_message(msg);

    // Both fetches complete in either order.
    for _ in 0..2 {
        let msg = recv(&mut rx).await;
        app.handle_message(msg);
    }
    assert!(app.stats.is_some());
    assert_eq!(app.top_urls.len(), 1);
}

#[tokio::test]
async fn test_failed_submit_preserves_input_and_uses_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "Invalid URL format"})),
        )
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server);
    app.url_input = "not a url".to_string();
    app.submit();

    let msg = recv(&mut rx).await;
    app.handle_message(msg);

    assert!(!app.submitting);
    assert_eq!(app.submit_error.as_deref(), Some("Invalid URL format"));
    assert!(app.submit_result.is_none());
    // Left for correction.
    assert_eq!(app.url_input, "not a url");
}

#[tokio::test]
async fn test_failed_submit_without_detail_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(ResponseTemplate::new(503).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server);
    app.url_input = "https://example.com".to_string();
    app.submit();

    let msg = recv(&mut rx).await;
    app.handle_message(msg);

    assert_eq!(app.submit_error.as_deref(), Some("Failed to shorten URL"));
    assert!(app.submit_result.is_none());
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(shorten_payload())
                .set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server);
    app.url_input = "https://example.com/a/b".to_string();
    app.submit();
    // Guarded: still in flight, so this must not issue a second request.
    app.url_input = "https://example.com/other".to_string();
    app.submit();

    let msg = recv(&mut rx).await;
    app.handle_message(msg);
    assert!(app.submit_result.is_some());

    server.verify().await;
}

#[tokio::test]
async fn test_empty_input_submit_is_noop() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shorten_payload()))
        .expect(0)
        .mount(&server)
        .await;

    let (mut app, _rx) = test_app(&server);
    app.url_input = "   ".to_string();
    app.submit();

    assert!(!app.submitting);
    tokio::time::sleep(Duration::from_millis(50)).await;
    server.verify().await;
}
