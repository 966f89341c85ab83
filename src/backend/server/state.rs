/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used by Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds two cloneable handles:
 * - the message store (in memory or Postgres)
 * - the broadcaster (local SSE channel plus optional Pusher app)
 *
 * Neither needs an outer lock. The memory store locks internally and the
 * broadcast sender is thread-safe.
 *
 * # Example
 *
 * ```rust
 * use codeshare::backend::server::state::AppState;
 * use codeshare::backend::messages::MessageStore;
 * use axum::extract::State;
 *
 * async fn handler(State(store): State<MessageStore>) {
 *     let messages = store.list().await;
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;
use crate::backend::messages::MessageStore;
use crate::backend::realtime::Broadcaster;

/// Application state shared by every handler
///
/// # Fields
///
/// * `store` - Append-only message list
/// * `broadcaster` - Delivers fan-out events to subscribers
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub store: MessageStore,
    pub broadcaster: Broadcaster,
}

impl AppState {
    pub fn new(store: MessageStore, broadcaster: Broadcaster) -> Self {
        Self { store, broadcaster }
    }

    /// State with an in-memory store and no Pusher app
    ///
    /// Used when nothing is configured, and by tests.
    pub fn in_memory() -> Self {
        Self::default()
    }
}

/// Allows handlers to extract `State<MessageStore>` directly
impl FromRef<AppState> for MessageStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allows handlers to extract `State<Broadcaster>` directly
impl FromRef<AppState> for Broadcaster {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.broadcaster.clone()
    }
}
