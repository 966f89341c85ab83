//! Messages API integration tests
//!
//! Tests for `GET` and `POST /api/messages` through the full router

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{post_message, test_server, MESSAGES};
use codeshare::backend::AppState;
use codeshare::shared::Message;

#[tokio::test]
async fn test_post_then_list() {
    let server = test_server(AppState::in_memory());

    let response = post_message(&server, json!({ "user": "you", "text": "hello" })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let posted: Message = response.json();
    assert_eq!(posted.user, "you");
    assert_eq!(posted.text, "hello");
    assert!(posted.file.is_none());
    assert!(posted.ts.ends_with('Z'));

    let listed: Vec<Message> = server.get(MESSAGES).await.json();
    assert_eq!(listed, vec![posted]);
}

#[tokio::test]
async fn test_list_is_empty_initially() {
    let server = test_server(AppState::in_memory());

    let response = server.get(MESSAGES).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_messages_are_listed_in_posting_order() {
    let server = test_server(AppState::in_memory());

    for text in ["one", "two", "three"] {
        post_message(&server, json!({ "text": text })).await;
    }

    let listed: Vec<Message> = server.get(MESSAGES).await.json();
    let texts: Vec<&str> = listed.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_missing_and_empty_user_default_to_anon() {
    let server = test_server(AppState::in_memory());

    let missing: Message = post_message(&server, json!({ "text": "a" })).await.json();
    let empty: Message = post_message(&server, json!({ "user": "", "text": "b" })).await.json();

    assert_eq!(missing.user, "anon");
    assert_eq!(empty.user, "anon");
}

#[tokio::test]
async fn test_scalar_user_is_turned_into_a_name() {
    let server = test_server(AppState::in_memory());

    let response = post_message(&server, json!({ "user": 5, "text": "hi" })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Message>().user, "5");

    let zero: Message = post_message(&server, json!({ "user": 0, "text": "hi" })).await.json();
    assert_eq!(zero.user, "anon");

    let response = post_message(&server, json!({ "user": ["a"], "text": "hi" })).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_whitespace_only_text_is_rejected() {
    let server = test_server(AppState::in_memory());

    let response = post_message(&server, json!({ "user": "you", "text": "   \n\t" })).await;
    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "text or file required");

    let listed: Vec<Message> = server.get(MESSAGES).await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_empty_body_object_is_rejected() {
    let server = test_server(AppState::in_memory());

    let response = post_message(&server, json!({})).await;
    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "text or file required");
}

#[tokio::test]
async fn test_invalid_json_is_rejected() {
    let server = test_server(AppState::in_memory());

    let response = server.post(MESSAGES).text("{not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_text_is_stored_untrimmed() {
    let server = test_server(AppState::in_memory());

    let posted: Message = post_message(&server, json!({ "text": "  indented\n" })).await.json();
    assert_eq!(posted.text, "  indented\n");
}

#[tokio::test]
async fn test_file_only_post_is_accepted() {
    let server = test_server(AppState::in_memory());
    let file = json!({
        "key": "0b7c-notes.txt",
        "name": "notes.txt",
        "size": 12,
        "url": "https://store.example/storage/v1/object/public/workspace-files/0b7c-notes.txt"
    });

    let response = post_message(&server, json!({ "user": "you", "file": file })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["text"], "");
    assert_eq!(body["file"], file);
}

#[tokio::test]
async fn test_message_json_carries_null_file() {
    let server = test_server(AppState::in_memory());

    let body: serde_json::Value = post_message(&server, json!({ "text": "hi" })).await.json();
    assert!(body.get("file").is_some_and(|f| f.is_null()));
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = test_server(AppState::in_memory());

    let response = server.get("/api/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
