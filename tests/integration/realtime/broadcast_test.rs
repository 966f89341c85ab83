//! Real-time broadcast integration tests
//!
//! Posts go through the router; events are read from a local subscriber.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use serde_json::json;
use tokio::sync::broadcast::error::TryRecvError;

use crate::common::{post_message, test_server};
use codeshare::backend::AppState;
use codeshare::shared::fanout::FANOUT_THRESHOLD_BYTES;
use codeshare::shared::{BroadcastEvent, Message};

#[tokio::test]
async fn test_small_message_is_broadcast_in_full() {
    let state = AppState::in_memory();
    let mut events = state.broadcaster.subscribe();
    let server = test_server(state);

    let posted: Message = post_message(&server, json!({ "user": "you", "text": "hello" }))
        .await
        .json();

    assert_matches!(events.try_recv(), Ok(BroadcastEvent::NewMessage(m)) if m == posted);
    assert_matches!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_large_message_is_broadcast_as_stub() {
    let state = AppState::in_memory();
    let mut events = state.broadcaster.subscribe();
    let server = test_server(state);

    let text = "x".repeat(FANOUT_THRESHOLD_BYTES);
    let response = post_message(&server, json!({ "user": "you", "text": text })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let posted: Message = response.json();

    let stub = assert_matches!(events.try_recv(), Ok(BroadcastEvent::LargeMessagePosted(stub)) => stub);
    assert_eq!(stub.id, posted.id);
    assert_eq!(stub.user, "you");
    assert_eq!(stub.timestamp, posted.ts);

    // subscribers re-fetch and find the full text
    let listed: Vec<Message> = server.get("/api/messages").await.json();
    assert_eq!(listed[0].text.len(), FANOUT_THRESHOLD_BYTES);
}

#[tokio::test]
async fn test_rejected_post_broadcasts_nothing() {
    let state = AppState::in_memory();
    let mut events = state.broadcaster.subscribe();
    let server = test_server(state);

    post_message(&server, json!({ "text": " " })).await;

    assert_matches!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_every_subscriber_receives_the_event() {
    let state = AppState::in_memory();
    let mut first = state.broadcaster.subscribe();
    let mut second = state.broadcaster.subscribe();
    let server = test_server(state);

    post_message(&server, json!({ "text": "fan out" })).await;

    assert_matches!(first.try_recv(), Ok(BroadcastEvent::NewMessage(_)));
    assert_matches!(second.try_recv(), Ok(BroadcastEvent::NewMessage(_)));
}
