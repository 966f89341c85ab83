/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` logs every request through `tracing`
 * - `CorsLayer::permissive()` lets a separately hosted page call the API
 */

use axum::{http::StatusCode, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use crate::backend::server::state::AppState;
use crate::backend::routes::api_routes::configure_api_routes;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Message store and broadcaster
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    let router = router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    router.with_state(app_state)
}
