//! Pusher fan-out integration tests
//!
//! The Pusher REST API is replaced by a wiremock server.

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{post_message, state_with_pusher, test_server, MESSAGES};
use codeshare::shared::Message;

async fn pusher_mock(status: u16) -> MockServer {
    let pusher = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/1/events"))
        .and(query_param("auth_key", "test-key"))
        .and(query_param("auth_version", "1.0"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({})))
        .mount(&pusher)
        .await;
    pusher
}

async fn triggered_bodies(pusher: &MockServer) -> Vec<Value> {
    pusher
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.body_json::<Value>().unwrap())
        .collect()
}

#[tokio::test]
async fn test_small_message_triggers_new_message() {
    let pusher = pusher_mock(200).await;
    let server = test_server(state_with_pusher(&pusher.uri()));

    let response = post_message(&server, json!({ "user": "you", "text": "hello" })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let posted: Message = response.json();

    let bodies = triggered_bodies(&pusher).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["name"], "new-message");
    assert_eq!(bodies[0]["channels"], json!(["workspace-channel"]));

    let data: Message = serde_json::from_str(bodies[0]["data"].as_str().unwrap()).unwrap();
    assert_eq!(data, posted);
}

#[tokio::test]
async fn test_large_message_triggers_stub_without_text() {
    let pusher = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/1/events"))
        .and(body_partial_json(json!({ "name": "large-message-posted" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&pusher)
        .await;
    let server = test_server(state_with_pusher(&pusher.uri()));

    let text = "large ".repeat(2000);
    let posted: Message = post_message(&server, json!({ "user": "you", "text": text })).await.json();

    let bodies = triggered_bodies(&pusher).await;
    let data: Value = serde_json::from_str(bodies[0]["data"].as_str().unwrap()).unwrap();
    assert_eq!(data, json!({ "id": posted.id, "user": "you", "timestamp": posted.ts }));
}

#[tokio::test]
async fn test_pusher_failure_is_internal_error_but_message_is_kept() {
    let pusher = pusher_mock(500).await;
    let server = test_server(state_with_pusher(&pusher.uri()));

    let response = post_message(&server, json!({ "user": "you", "text": "hello" })).await;
    crate::assert_error_body!(response, StatusCode::INTERNAL_SERVER_ERROR, "internal");

    // the store is written before the broadcast and is not rolled back
    let listed: Vec<Message> = server.get(MESSAGES).await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].text, "hello");
}

#[tokio::test]
async fn test_unreachable_pusher_is_internal_error() {
    // nothing listens on the discard port
    let server = test_server(state_with_pusher("http://127.0.0.1:9"));

    let response = post_message(&server, json!({ "text": "hello" })).await;
    crate::assert_error_body!(response, StatusCode::INTERNAL_SERVER_ERROR, "internal");
}
