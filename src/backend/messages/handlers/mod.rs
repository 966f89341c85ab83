//! Message Handlers Module
//!
//! This module contains the Axum handlers for `/api/messages`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs  - Module exports and documentation
//! ├── list.rs - GET /api/messages
//! └── post.rs - POST /api/messages
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use codeshare::backend::messages::handlers::{handle_list_messages, handle_post_message};
//! use codeshare::backend::server::AppState;
//! use axum::{routing::get, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/messages", get(handle_list_messages).post(handle_post_message));
//! ```

/// Read handler
pub mod list;

/// Write handler
pub mod post;

pub use list::handle_list_messages;
pub use post::handle_post_message;
