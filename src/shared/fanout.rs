/**
 * Fan-out Decision
 *
 * Pusher rejects events whose payload exceeds 10 KB. Messages whose JSON
 * encoding stays below [`FANOUT_THRESHOLD_BYTES`] are broadcast in full; at
 * or above it only a `{id, user, timestamp}` stub goes out and subscribers
 * re-fetch the list.
 *
 * This is a two-branch policy. There are no retries and no partial delivery.
 */

use crate::shared::event::{BroadcastEvent, MessageStub};
use crate::shared::message::Message;

/// Largest serialized message (exclusive) broadcast in full
pub const FANOUT_THRESHOLD_BYTES: usize = 9000;

/// Choose the event to broadcast for a freshly stored message
///
/// # Errors
///
/// Returns the serializer error if the message cannot be encoded, which the
/// caller treats as an internal failure.
///
/// # Example
///
/// ```rust
/// use codeshare::shared::{fanout::decide, BroadcastEvent, Message};
///
/// let message = Message::new("you".to_string(), "hello".to_string(), None);
/// assert!(matches!(decide(&message).unwrap(), BroadcastEvent::NewMessage(_)));
/// ```
pub fn decide(message: &Message) -> Result<BroadcastEvent, serde_json::Error> {
    decide_with_threshold(message, FANOUT_THRESHOLD_BYTES)
}

/// [`decide`] with an explicit threshold
pub fn decide_with_threshold(
    message: &Message,
    threshold: usize,
) -> Result<BroadcastEvent, serde_json::Error> {
    let size = message.serialized_size()?;

    if size < threshold {
        tracing::debug!("[Fanout] Message {} is {} bytes, broadcasting in full", message.id, size);
        Ok(BroadcastEvent::NewMessage(message.clone()))
    } else {
        tracing::info!(
            "[Fanout] Message {} is {} bytes (limit {}), broadcasting notification only",
            message.id,
            size,
            threshold
        );
        Ok(BroadcastEvent::LargeMessagePosted(MessageStub::from(message)))
    }
}
