//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client library and the backend. They define the JSON exchanged over
//! the HTTP API and the events pushed to subscribers.
//!
//! # Overview
//!
//! - **`message`** - `Message`, `FileAttachment`, `PostMessageRequest`
//! - **`event`** - `BroadcastEvent` and the notification stub
//! - **`fanout`** - Size-based choice between the two broadcast events
//! - **`error`** - `SharedError`
//! - **`config`** - Client configuration and its builder

/// Message data structure
pub mod message;

/// Broadcast event types
pub mod event;

/// Fan-out decision
pub mod fanout;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use message::{FileAttachment, Message, PostMessageRequest};
pub use event::{BroadcastEvent, MessageStub, CHANNEL};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
