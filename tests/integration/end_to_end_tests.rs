//! Batch driver against the real admin server

use crate::common::fixtures::{url_lines, ConfigFactory, EDITOR_KEY, VIEWER_KEY};
use crate::common::{RecordFactory, TestServer};
use trash_by_url::driver::{
    AjaxTransport, AutoConfirm, BatchDriver, DriverError, RecordingView, RunStatus,
    TransportConfig,
};
use trash_by_url::RecordStatus;

#[actix_web::test]
async fn test_twelve_urls_in_three_batches() {
    let server = TestServer::start(ConfigFactory::with_site(10)).await;

    let mut urls: Vec<String> = RecordFactory::many(10).iter().map(RecordFactory::url).collect();
    urls.push("http://example.com/locked".to_string());
    urls.push("http://example.com/missing".to_string());

    let transport = AjaxTransport::connect(TransportConfig::new(server.url(), EDITOR_KEY))
        .await
        .unwrap();
    let driver = BatchDriver::new(transport, 5);
    let mut view = RecordingView::default();
    let summary = driver
        .run(&url_lines(&urls), &mut AutoConfirm(true), &mut view)
        .await
        .unwrap();

    assert_eq!(summary.status, RunStatus::Completed);
    assert_eq!(summary.batches_total, 3);
    assert_eq!(view.messages.len(), 12);
    assert_eq!(view.messages[0], "✅ Post ID 100 moved to trash.");
    assert_eq!(view.messages[9], "✅ Post ID 109 moved to trash.");
    assert_eq!(
        view.messages[10],
        "❌ Failed to delete post for URL \"http://example.com/locked\"."
    );
    assert_eq!(
        view.messages[11],
        "❌ No post found for URL \"http://example.com/missing\"."
    );

    for id in 100..110 {
        assert_eq!(server.store.get(id).unwrap().status, RecordStatus::Trash);
    }
    assert_eq!(server.store.get(11).unwrap().status, RecordStatus::Publish);

    server.stop().await;
}

#[actix_web::test]
async fn test_forbidden_actor_halts_on_first_batch() {
    let server = TestServer::start(ConfigFactory::with_site(8)).await;
    let urls: Vec<String> = RecordFactory::many(8).iter().map(RecordFactory::url).collect();

    let transport = AjaxTransport::connect(TransportConfig::new(server.url(), VIEWER_KEY))
        .await
        .unwrap();
    let driver = BatchDriver::new(transport, 3);
    let mut view = RecordingView::default();
    let summary = driver
        .run(&url_lines(&urls), &mut AutoConfirm(true), &mut view)
        .await
        .unwrap();

    assert_eq!(summary.batches_sent, 1);
    assert_eq!(
        view.messages,
        vec!["❌ Error: You are not allowed to delete posts."]
    );
    assert!(
        (100..108).all(|id| server.store.get(id).unwrap().status == RecordStatus::Publish)
    );

    server.stop().await;
}

#[actix_web::test]
async fn test_second_run_reports_already_trashed() {
    let server = TestServer::start(ConfigFactory::with_site(0)).await;
    let transport = AjaxTransport::connect(TransportConfig::new(server.url(), EDITOR_KEY))
        .await
        .unwrap();
    let driver = BatchDriver::new(transport, 5);

    let mut first = RecordingView::default();
    driver
        .run("http://example.com/a", &mut AutoConfirm(true), &mut first)
        .await
        .unwrap();
    assert_eq!(first.messages, vec!["✅ Post ID 10 moved to trash."]);

    let mut second = RecordingView::default();
    driver
        .run("http://example.com/a", &mut AutoConfirm(true), &mut second)
        .await
        .unwrap();
    assert_eq!(
        second.messages,
        vec!["❌ No post found for URL \"http://example.com/a\"."]
    );

    assert!(server.store.restore(10));
    server.stop().await;
}

#[actix_web::test]
async fn test_unknown_key_is_refused_with_server_reason() {
    let server = TestServer::start(ConfigFactory::with_site(0)).await;

    let err = AjaxTransport::connect(TransportConfig::new(server.url(), "not-a-key"))
        .await
        .unwrap_err();
    match err {
        DriverError::Application(reason) => {
            assert_eq!(reason, "Authentication error: Missing or unknown API key.")
        }
        other => panic!("unexpected error: {:?}", other),
    }

    server.stop().await;
}
