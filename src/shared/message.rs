/**
 * Message Data Structure
 *
 * This module defines the Message struct posted to the workspace, its
 * optional file attachment, and the request body accepted by
 * `POST /api/messages`.
 *
 * The types are shared between the server and the client library, so the
 * JSON produced by one side deserializes on the other without translation.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Author used when a post carries no (or an empty) user name
pub const DEFAULT_USER: &str = "anon";

/// Metadata of a file uploaded to the object store
///
/// The file bytes never pass through the API. The client uploads them
/// directly to the bucket and posts only this metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileAttachment {
    /// Object key inside the bucket
    pub key: String,
    /// Original file name as picked by the user
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Public retrieval URL
    pub url: String,
}

/// A single workspace message
///
/// Messages are created once per accepted post and never mutated afterwards.
///
/// # Fields
/// * `id` - Post time in wall-clock milliseconds (not guaranteed unique)
/// * `user` - Author name, `"anon"` when none was given
/// * `text` - Message body, stored exactly as submitted
/// * `file` - Optional attachment metadata, serialized as `null` when absent
/// * `ts` - Post time as an ISO-8601 string with millisecond precision
///
/// # Example
/// ```rust
/// use codeshare::shared::Message;
///
/// let message = Message::new("you".to_string(), "hello".to_string(), None);
/// assert!(message.id > 0);
/// assert!(message.ts.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub user: String,
    pub text: String,
    pub file: Option<FileAttachment>,
    pub ts: String,
}

impl Message {
    /// Create a message stamped with the current time
    pub fn new(user: String, text: String, file: Option<FileAttachment>) -> Self {
        Self::at(Utc::now(), user, text, file)
    }

    /// Create a message stamped with the given time
    ///
    /// Both `id` and `ts` are derived from `posted_at`, which keeps them
    /// consistent with each other.
    pub fn at(
        posted_at: DateTime<Utc>,
        user: String,
        text: String,
        file: Option<FileAttachment>,
    ) -> Self {
        Self {
            id: posted_at.timestamp_millis(),
            user,
            text,
            file,
            ts: format_timestamp(posted_at),
        }
    }

    /// Size of the JSON encoding of this message in bytes
    pub fn serialized_size(&self) -> Result<usize, serde_json::Error> {
        serde_json::to_vec(self).map(|bytes| bytes.len())
    }
}

/// Body of `POST /api/messages`
///
/// Every field is optional on the wire; defaults are applied during
/// validation rather than deserialization so that the rules live in one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostMessageRequest {
    /// Numbers and booleans are accepted and turned into names
    #[serde(
        default,
        deserialize_with = "user_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileAttachment>,
}

impl PostMessageRequest {
    /// Request carrying only text from the given user
    pub fn text(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            text: Some(text.into()),
            file: None,
        }
    }

    /// Attach file metadata to the request
    pub fn with_file(mut self, file: FileAttachment) -> Self {
        self.file = Some(file);
        self
    }
}

/// Read `user` from a scalar JSON value
///
/// `0`, `false` and `null` count as missing. Arrays and objects are rejected.
fn user_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::String(name) => Ok(Some(name)),
        Value::Number(number) => {
            let value = number.as_f64().unwrap_or_default();
            if value == 0.0 {
                Ok(None)
            } else if value.fract() == 0.0 && value.abs() < 1e15 {
                Ok(Some(format!("{}", value as i64)))
            } else {
                Ok(Some(number.to_string()))
            }
        }
        other => Err(D::Error::custom(format!(
            "user must be a string, number or boolean, got {}",
            other
        ))),
    }
}

/// Format a timestamp the way browsers print `Date.prototype.toISOString()`
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
