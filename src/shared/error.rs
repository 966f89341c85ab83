//! Shared Error Types
//!
//! Failures that both the server and the client library can hit while
//! handling messages and broadcast events.
//!
//! ```rust
//! use codeshare::shared::error::SharedError;
//!
//! let error = SharedError::invalid_post("text", "text or file required");
//! assert!(error.is_client_error());
//! ```

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A post that breaks the text-or-file invariant
    #[error("invalid {field}: {message}")]
    InvalidPost { field: String, message: String },

    /// Event name other than `new-message` or `large-message-posted`
    #[error("unknown event '{0}'")]
    UnknownEvent(String),

    /// JSON that does not fit a message or event
    #[error("JSON error: {0}")]
    Json(String),
}

impl SharedError {
    pub fn invalid_post(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPost {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the caller's input caused the error
    ///
    /// The server answers these with 400; anything else is internal.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidPost { .. } | Self::UnknownEvent(_))
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
