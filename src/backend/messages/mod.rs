//! Messages Backend Module
//!
//! This module contains the server-side message functionality:
//! - post validation and message construction
//! - the append-only message store (memory or Postgres)
//! - the `/api/messages` handlers
//!
//! The fan-out decision itself lives in `shared::fanout`, next to the event
//! types it produces.
//!
//! # Example
//!
//! ```rust,no_run
//! use codeshare::backend::messages::MessageStore;
//! use codeshare::shared::Message;
//!
//! # async fn example() {
//! let store = MessageStore::memory();
//! let message = Message::new("you".to_string(), "hello".to_string(), None);
//! store.append(&message).await.unwrap();
//! # }
//! ```

/// Post validation
pub mod validation;

/// Message store
pub mod store;

/// HTTP handlers
pub mod handlers;

/// Database operations for messages
pub mod db;

/// Re-export commonly used types
pub use store::MessageStore;
pub use handlers::{handle_list_messages, handle_post_message};
