/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Messages
 * - `GET /api/messages` - Full ordered message list
 * - `POST /api/messages` - Post a message
 *
 * ## Realtime
 * - `GET /api/realtime` - Server-Sent Events stream of broadcast events
 */

use axum::{routing::get, Router};
use crate::backend::server::state::AppState;
use crate::backend::messages::handlers::{handle_list_messages, handle_post_message};
use crate::backend::realtime::subscription::handle_realtime_subscription;

/// Path of the message collection
pub const MESSAGES_PATH: &str = "/api/messages";

/// Path of the SSE stream
pub const REALTIME_PATH: &str = "/api/realtime";

/// Configure API routes
///
/// All routes are public. The passphrase gate lives in the client and is
/// not enforced here.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            MESSAGES_PATH,
            get(handle_list_messages).post(handle_post_message),
        )
        .route(
            REALTIME_PATH,
            get(handle_realtime_subscription),
        )
}
