/**
 * Server Initialization
 *
 * This module builds the application state from configuration and wires it
 * into the router.
 *
 * # Initialization Process
 *
 * 1. Connect the message store (Postgres if configured, memory otherwise)
 * 2. Create the broadcaster (with a Pusher client if configured)
 * 3. Create and configure the router
 */

use axum::Router;
use crate::backend::messages::MessageStore;
use crate::backend::realtime::{Broadcaster, PusherClient};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Build the application state described by `config`
///
/// Missing or unreachable services degrade gracefully: no database means
/// an in-memory store, no Pusher credentials means local delivery only.
pub async fn build_state(config: &ServerConfig) -> AppState {
    let store = match load_database(config.database_url.as_deref()).await {
        Some(pool) => MessageStore::postgres(pool),
        None => MessageStore::memory(),
    };

    let pusher = config.pusher.clone().map(|pusher_config| {
        tracing::info!(
            "Pusher enabled for app {} via {}",
            pusher_config.app_id,
            pusher_config.base_url()
        );
        PusherClient::new(pusher_config)
    });

    let state = AppState::new(store, Broadcaster::new(pusher));
    tracing::info!(
        "Using {} message store, Pusher {}",
        state.store.backend_name(),
        if state.broadcaster.has_pusher() { "enabled" } else { "disabled" }
    );
    state
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing CodeShare backend server");
    let state = build_state(config).await;
    create_router(state)
}
