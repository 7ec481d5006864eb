//! Batch driver against a mocked admin server

use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use trash_by_url::driver::{
    AjaxTransport, AutoConfirm, BatchDriver, DriverError, RecordingView, RunStatus,
    TransportConfig,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const API_KEY: &str = "driver-key";

async fn server_with_nonce() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/nonce"))
        .and(header("X-Api-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nonce": "tok123",
            "action": "trash_by_url_batch",
            "batch_size": 5
        })))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn urls(n: usize) -> String {
    (0..n)
        .map(|i| format!("https://example.com/post-{}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Answers each batch with one message per URL, numbered by call
struct EchoBatches {
    calls: AtomicUsize,
    fail_on: Option<usize>,
}

impl Respond for EchoBatches {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if Some(call) == self.fail_on {
            return ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>");
        }

        let form: Vec<(String, String)> =
            url::form_urlencoded::parse(&request.body).into_owned().collect();
        let batch: Vec<String> = form
            .iter()
            .find(|(k, _)| k == "urls")
            .map(|(_, v)| serde_json::from_str(v).unwrap())
            .unwrap_or_default();

        let messages: Vec<String> = batch
            .iter()
            .map(|u| format!("batch {} {}", call, u))
            .collect();
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "messages": messages }
        }))
    }
}

#[tokio::test]
async fn test_batches_carry_token_and_action() {
    let server = server_with_nonce().await;
    Mock::given(method("POST"))
        .and(path("/admin/ajax"))
        .and(header("X-Api-Key", API_KEY))
        .and(body_string_contains("action=trash_by_url_batch"))
        .and(body_string_contains("_ajax_nonce=tok123"))
        .respond_with(EchoBatches {
            calls: AtomicUsize::new(0),
            fail_on: None,
        })
        .expect(3)
        .mount(&server)
        .await;

    let transport = AjaxTransport::connect(TransportConfig::new(server.uri(), API_KEY))
        .await
        .unwrap();
    assert_eq!(transport.batch_size(), 5);

    let driver = BatchDriver::new(transport, 5);
    let mut view = RecordingView::default();
    let summary = driver
        .run(&urls(12), &mut AutoConfirm(true), &mut view)
        .await
        .unwrap();

    assert_eq!(summary.status, RunStatus::Completed);
    assert_eq!(summary.batches_sent, 3);
    assert_eq!(view.messages.len(), 12);
    assert_eq!(view.messages[0], "batch 1 https://example.com/post-0");
    assert_eq!(view.messages[5], "batch 2 https://example.com/post-5");
    assert_eq!(view.messages[11], "batch 3 https://example.com/post-11");
}

#[tokio::test]
async fn test_non_json_reply_halts_after_second_batch() {
    let server = server_with_nonce().await;
    Mock::given(method("POST"))
        .and(path("/admin/ajax"))
        .respond_with(EchoBatches {
            calls: AtomicUsize::new(0),
            fail_on: Some(2),
        })
        .expect(2)
        .mount(&server)
        .await;

    let transport = AjaxTransport::connect(TransportConfig::new(server.uri(), API_KEY))
        .await
        .unwrap();
    let driver = BatchDriver::new(transport, 5);
    let mut view = RecordingView::default();
    let summary = driver
        .run(&urls(12), &mut AutoConfirm(true), &mut view)
        .await
        .unwrap();

    assert_eq!(summary.batches_sent, 2);
    assert!(matches!(summary.status, RunStatus::Halted { .. }));
    assert_eq!(view.messages.len(), 6);
    assert!(view.messages[5].starts_with("❌ Error: Invalid response: HTTP 502"));
    assert!(!view.busy);
}

#[tokio::test]
async fn test_timeout_is_a_transport_error() {
    let server = server_with_nonce().await;
    Mock::given(method("POST"))
        .and(path("/admin/ajax"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": {"messages": []}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config =
        TransportConfig::new(server.uri(), API_KEY).with_timeout(Duration::from_millis(200));
    let transport = AjaxTransport::connect(config).await.unwrap();
    let driver = BatchDriver::new(transport, 5);
    let mut view = RecordingView::default();
    let summary = driver
        .run(&urls(7), &mut AutoConfirm(true), &mut view)
        .await
        .unwrap();

    assert_eq!(summary.batches_sent, 1);
    assert_eq!(view.messages.len(), 1);
    assert!(view.messages[0].starts_with("❌ Error: "));
}

#[tokio::test]
async fn test_rejected_api_key_stops_before_any_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/nonce"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": "AUTH_ERROR",
                "message": "Authentication error: Missing or unknown API key.",
                "timestamp": 0,
                "request_id": null
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/ajax"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = AjaxTransport::connect(TransportConfig::new(server.uri(), "nope"))
        .await
        .unwrap_err();
    match err {
        DriverError::Application(reason) => {
            assert_eq!(reason, "Authentication error: Missing or unknown API key.")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_refusal_without_error_body_names_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/nonce"))
        .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
        .mount(&server)
        .await;

    let err = AjaxTransport::connect(TransportConfig::new(server.uri(), "nope"))
        .await
        .unwrap_err();
    match err {
        DriverError::Application(reason) => assert!(reason.starts_with("Server refused the API key (403")),
        other => panic!("unexpected error: {:?}", other),
    }
}
