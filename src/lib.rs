//! CodeShare - Main Library
//!
//! CodeShare is a small shared workspace: people behind the same passphrase
//! post text and code snippets (optionally with an attached file) and every
//! connected client sees new posts in real time.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used by both sides
//!   - `Message`, `FileAttachment`, `PostMessageRequest`
//!   - Broadcast events and the size-based fan-out decision
//!   - Client configuration, error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server for `GET`/`POST /api/messages`
//!   - Message store (in-memory or Postgres)
//!   - Broadcasting to local SSE subscribers and to Pusher
//!
//! - **`client`** - Client library used by the `codeshare` CLI
//!   - API client and SSE subscription
//!   - Direct uploads to the object store
//!   - Passphrase gate and view state
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (Axum, sqlx, tower-http); on by default
//!
//! # Usage
//!
//! ```rust,no_run
//! use codeshare::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() {
//! let app = create_app(&ServerConfig::default()).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```
//!
//! # Fan-out
//!
//! Every accepted post is broadcast on `workspace-channel`. Messages whose
//! JSON encoding is under 9000 bytes travel in full as `new-message`;
//! bigger ones send only a `large-message-posted` stub and subscribers
//! re-fetch the list.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client library
pub mod client;
