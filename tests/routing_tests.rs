mod common;

use common::TestContext;

use axum::http::header;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_unknown_path_returns_not_found() {
    let setup = TestContext::new().await;

    let response = setup
        .send_get_request("/unknown")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("Missing content-type header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let body = setup
        .parse_response_body(response)
        .await
        .expect("Failed to parse response body");
    assert_eq!(body, json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn test_post_to_unknown_path_returns_not_found() {
    let setup = TestContext::new().await;

    let response = setup
        .send_post_request("/other", json!({}))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_method_on_known_path_returns_not_found() {
    let setup = TestContext::new().await;

    // /files only accepts POST; anything else falls through to the 404 body
    let response = setup
        .send_request("DELETE", "/files")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = setup
        .parse_response_body(response)
        .await
        .expect("Failed to parse response body");
    assert_eq!(body, json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn test_get_files_without_trailing_slash_returns_not_found() {
    let setup = TestContext::new().await;

    let response = setup
        .send_get_request("/files")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_on_download_path_returns_not_found() {
    let setup = TestContext::new().await;

    let response = setup
        .send_request("PUT", "/files/uploads/123_abc_file.txt")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let setup = TestContext::new().await;

    let response = setup
        .send_get_request("/health")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = setup
        .parse_response_body(response)
        .await
        .expect("Failed to parse response body");
    assert_eq!(body["status"], "ok");
}
