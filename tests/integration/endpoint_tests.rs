//! Admin endpoints built from a configuration file

use crate::common::fixtures::{BATCH_ACTION, EDITOR_KEY, VIEWER_KEY};
use crate::common::EnvelopeAssertions;
use actix_web::http::StatusCode;
use actix_web::{test, web};
use std::io::Write;
use tempfile::NamedTempFile;
use trash_by_url::config::Config;
use trash_by_url::server::routes::admin::NonceResponse;
use trash_by_url::server::{HttpServer, ServerBuilder};
use trash_by_url::AjaxEnvelope;

const CONFIG_YAML: &str = r#"
auth:
  nonce_secret: "file-based-secret-file-based-secret"
  actors:
    - name: "editor"
      api_key: "editor-key"
      capabilities: ["manage_options", "delete_posts"]
    - name: "viewer"
      api_key: "viewer-key"
      capabilities: ["manage_options"]

batch:
  size: 3

store:
  home_url: "http://example.com"
  records:
    - id: 10
      path: "/a"
      title: "A"
    - id: 11
      path: "/locked/"
      title: "Locked"
      protected: true
    - id: 12
      path: "/2024/05/hello/"
      title: "Hello"
"#;

async fn config_from_file() -> Config {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CONFIG_YAML.as_bytes()).unwrap();
    Config::from_file(file.path()).await.unwrap()
}

/// Ask `/admin/nonce` for a token as the actor owning `$key`
macro_rules! fetch_nonce {
    ($app:expr, $key:expr) => {{
        let issued: NonceResponse = test::call_and_read_body_json(
            &$app,
            test::TestRequest::get()
                .uri("/admin/nonce")
                .insert_header(("X-Api-Key", $key))
                .to_request(),
        )
        .await;
        issued
    }};
}

#[actix_web::test]
async fn test_configured_site_trashes_by_url() {
    let server = ServerBuilder::new()
        .with_config(config_from_file().await)
        .build()
        .await
        .unwrap();
    let app = test::init_service(HttpServer::create_app(web::Data::new(server.state().clone()))).await;

    let issued = fetch_nonce!(app, EDITOR_KEY);
    assert_eq!(issued.batch_size, 3);
    assert_eq!(issued.action, BATCH_ACTION);

    let urls = serde_json::json!([
        "http://example.com/a",
        "  ",
        "http://example.com/locked/",
        "http://example.com/2024/05/hello",
        "http://example.com/?p=12",
        "https://elsewhere.test/a",
    ])
    .to_string();

    let req = test::TestRequest::post()
        .uri("/admin/ajax")
        .insert_header(("X-Api-Key", EDITOR_KEY))
        .set_form([
            ("action", issued.action.as_str()),
            ("urls", urls.as_str()),
            ("_ajax_nonce", issued.nonce.as_str()),
        ])
        .to_request();
    let body: AjaxEnvelope = test::call_and_read_body_json(&app, req).await;

    body.assert_messages(&[
        "✅ Post ID 10 moved to trash.",
        "❌ Failed to delete post for URL \"http://example.com/locked/\".",
        "✅ Post ID 12 moved to trash.",
        "❌ No post found for URL \"http://example.com/?p=12\".",
        "❌ No post found for URL \"https://elsewhere.test/a\".",
    ]);
}

#[actix_web::test]
async fn test_viewer_token_cannot_trash() {
    let server = ServerBuilder::new()
        .with_config(config_from_file().await)
        .build()
        .await
        .unwrap();
    let app = test::init_service(HttpServer::create_app(web::Data::new(server.state().clone()))).await;

    let issued = fetch_nonce!(app, VIEWER_KEY);
    let req = test::TestRequest::post()
        .uri("/admin/ajax")
        .insert_header(("X-Api-Key", VIEWER_KEY))
        .set_form([
            ("action", issued.action.as_str()),
            ("urls", r#"["http://example.com/a"]"#),
            ("_ajax_nonce", issued.nonce.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: AjaxEnvelope = test::read_body_json(resp).await;
    body.assert_error("You are not allowed to delete posts.");
}

#[actix_web::test]
async fn test_admin_page_via_query_key() {
    let server = ServerBuilder::new()
        .with_config(config_from_file().await)
        .build()
        .await
        .unwrap();
    let app = test::init_service(HttpServer::create_app(web::Data::new(server.state().clone()))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/trash-by-url?api_key=editor-key")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/trash-by-url?api_key=wrong")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_oversized_form_is_invalid_input() {
    let mut config = config_from_file().await;
    config.service.server.max_body_size = 64;
    let server = ServerBuilder::new().with_config(config).build().await.unwrap();
    let app = test::init_service(HttpServer::create_app(web::Data::new(server.state().clone()))).await;

    let urls = serde_json::to_string(&vec!["http://example.com/a"; 20]).unwrap();
    let req = test::TestRequest::post()
        .uri("/admin/ajax")
        .insert_header(("X-Api-Key", EDITOR_KEY))
        .set_form([("action", BATCH_ACTION), ("urls", urls.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: AjaxEnvelope = test::read_body_json(resp).await;
    body.assert_error("Invalid input.");
}
