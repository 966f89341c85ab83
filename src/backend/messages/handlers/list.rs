/**
 * List Handler
 *
 * `GET /api/messages` returns every stored message in insertion order.
 * There is no pagination; clients replace their whole view with the result.
 */

use crate::backend::error::BackendError;
use crate::backend::messages::MessageStore;
use crate::shared::Message;
use axum::{extract::State, Json};

/// Handle `GET /api/messages`
///
/// # Errors
///
/// * `500 Internal Server Error` - the store could not be read
pub async fn handle_list_messages(
    State(store): State<MessageStore>,
) -> Result<Json<Vec<Message>>, BackendError> {
    let messages = store.list().await?;
    tracing::debug!("[Messages] Listing {} messages", messages.len());
    Ok(Json(messages))
}
