//! Common test utilities and helpers
//!
//! - Test server construction around an [`AppState`]
//! - Pusher credentials pointing at a mock server
//! - Assertion macros for error bodies
//! - PostgreSQL fixtures

pub mod assertions;

use axum_test::{TestResponse, TestServer};
use codeshare::backend::realtime::{Broadcaster, PusherClient, PusherConfig};
use codeshare::backend::routes::create_router;
use codeshare::backend::{AppState, MessageStore};
use serde_json::Value;

pub const MESSAGES: &str = "/api/messages";

/// Test server over the full router
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).unwrap()
}

/// Pusher app whose API lives at `host`
pub fn pusher_config(host: &str) -> PusherConfig {
    PusherConfig {
        app_id: "1".to_string(),
        key: "test-key".to_string(),
        secret: "test-secret".to_string(),
        cluster: "eu".to_string(),
        host: Some(host.to_string()),
    }
}

/// In-memory state that also triggers the Pusher app at `host`
pub fn state_with_pusher(host: &str) -> AppState {
    let pusher = PusherClient::new(pusher_config(host));
    AppState::new(MessageStore::memory(), Broadcaster::new(Some(pusher)))
}

/// `POST /api/messages` with a JSON body
pub async fn post_message(server: &TestServer, body: Value) -> TestResponse {
    server.post(MESSAGES).json(&body).await
}
