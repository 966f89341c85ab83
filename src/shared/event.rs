/**
 * Broadcast Event System
 *
 * This module defines the events pushed to subscribers after a post is
 * accepted. There are exactly two:
 *
 * - `new-message` carries the full message
 * - `large-message-posted` carries only `{id, user, timestamp}` and tells
 *   subscribers to re-fetch the message list
 *
 * Both go out on the single channel [`CHANNEL`].
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::message::Message;

/// Pub/sub channel every event is published on
pub const CHANNEL: &str = "workspace-channel";

/// Event name for a full message broadcast
pub const NEW_MESSAGE: &str = "new-message";

/// Event name for a notification stub broadcast
pub const LARGE_MESSAGE_POSTED: &str = "large-message-posted";

/// Notification sent instead of a message that is too large for the channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageStub {
    pub id: i64,
    pub user: String,
    /// The `ts` of the message being announced
    pub timestamp: String,
}

impl From<&Message> for MessageStub {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            user: message.user.clone(),
            timestamp: message.ts.clone(),
        }
    }
}

/// Event delivered to subscribers of [`CHANNEL`]
///
/// The serde representation is `{"event": <name>, "data": <payload>}`, which is
/// what in-process subscribers receive. Pusher receives the name and the
/// payload separately, see [`BroadcastEvent::name`] and
/// [`BroadcastEvent::data_json`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data")]
pub enum BroadcastEvent {
    #[serde(rename = "new-message")]
    NewMessage(Message),
    #[serde(rename = "large-message-posted")]
    LargeMessagePosted(MessageStub),
}

impl BroadcastEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMessage(_) => NEW_MESSAGE,
            Self::LargeMessagePosted(_) => LARGE_MESSAGE_POSTED,
        }
    }

    /// Id of the message this event announces
    pub fn message_id(&self) -> i64 {
        match self {
            Self::NewMessage(message) => message.id,
            Self::LargeMessagePosted(stub) => stub.id,
        }
    }

    /// Payload encoded as a JSON string
    pub fn data_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::NewMessage(message) => serde_json::to_string(message),
            Self::LargeMessagePosted(stub) => serde_json::to_string(stub),
        }
    }

    /// Rebuild an event from its wire name and JSON payload
    pub fn from_parts(name: &str, data: &str) -> Result<Self, SharedError> {
        match name {
            NEW_MESSAGE => Ok(Self::NewMessage(serde_json::from_str(data)?)),
            LARGE_MESSAGE_POSTED => Ok(Self::LargeMessagePosted(serde_json::from_str(data)?)),
            other => Err(SharedError::UnknownEvent(other.to_string())),
        }
    }
}
