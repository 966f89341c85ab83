/**
 * Post Handler
 *
 * `POST /api/messages` accepts `{ user, text, file }`, stores the message and
 * broadcasts it.
 *
 * # Flow
 *
 * 1. Parse the JSON body (400 if it is not a valid request)
 * 2. Validate: blank text without a file is rejected with 400
 * 3. Stamp the message with the current time and append it to the store
 * 4. Run the fan-out decision and publish the chosen event
 * 5. Answer 201 with the stored message
 *
 * A failure in step 3 or 4 is answered with a generic 500. A message that
 * was stored before the broadcast failed stays stored.
 */

use crate::backend::error::BackendError;
use crate::backend::messages::validation::validate_post;
use crate::backend::server::state::AppState;
use crate::shared::fanout::decide;
use crate::shared::{Message, PostMessageRequest};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;

/// Handle `POST /api/messages`
///
/// # Errors
///
/// * `400 Bad Request` - body is not a JSON post request, or it has neither
///   text nor file (`{"error":"text or file required"}`)
/// * `500 Internal Server Error` - storing or broadcasting failed
///   (`{"error":"internal"}`)
///
/// # Example Request
///
/// ```http
/// POST /api/messages HTTP/1.1
/// Content-Type: application/json
///
/// {"user":"you","text":"hello"}
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 201 Created
///
/// {"id":1714564800000,"user":"you","text":"hello","file":null,"ts":"2024-05-01T12:00:00.000Z"}
/// ```
pub async fn handle_post_message(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Message>), BackendError> {
    let request: PostMessageRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("[Messages] Unparseable request body: {}", e);
        BackendError::handler(StatusCode::BAD_REQUEST, "invalid JSON body")
    })?;

    let post = validate_post(request)?;
    let message = post.into_message(Utc::now());

    app_state.store.append(&message).await?;
    tracing::info!(
        "[Messages] Stored message {} from {} ({} chars, file: {})",
        message.id,
        message.user,
        message.text.chars().count(),
        message.file.is_some()
    );

    let event = decide(&message)?;
    app_state.broadcaster.publish(event).await?;

    Ok((StatusCode::CREATED, Json(message)))
}
