/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are returned from HTTP handlers and converted to responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request problems detected by a handler, such as a body that is not JSON.
 *
 * ## Store Errors
 *
 * Failures reading or appending to the message store.
 *
 * ## Broadcast Errors
 *
 * Failures handing an event to the pub/sub service.
 *
 * Only handler errors and client-side shared errors reach the caller with
 * their message. Everything else is reported as `"internal"`.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Message returned to callers for every 5xx response
pub const INTERNAL_MESSAGE: &str = "internal";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use codeshare::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "invalid JSON body");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::store("connection reset");
/// assert_eq!(err.public_message(), "internal");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., unparseable body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Message store error
    #[error("Store error: {message}")]
    StoreError {
        /// Human-readable error message
        message: String,
    },

    /// Pub/sub delivery error
    #[error("Broadcast error: {message}")]
    BroadcastError {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (validation, malformed events)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// Create a new broadcast error
    pub fn broadcast(message: impl Into<String>) -> Self {
        Self::BroadcastError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `StoreError` - 500 Internal Server Error
    /// - `BroadcastError` - 500 Internal Server Error
    /// - `SharedError` - 400 for invalid posts and unknown events, 500 for JSON errors
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StoreError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BroadcastError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the full error message, for logs
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StoreError { message } => message.clone(),
            Self::BroadcastError { message } => message.clone(),
            Self::SharedError(SharedError::InvalidPost { message, .. }) => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }

    /// Message safe to return to the caller
    ///
    /// Server-side failures never leak their details.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            INTERNAL_MESSAGE.to_string()
        } else {
            self.message()
        }
    }
}

#[cfg(feature = "ssr")]
impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        Self::store(err.to_string())
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::broadcast(err.to_string())
    }
}
