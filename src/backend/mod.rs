//! Backend Module
//!
//! This module contains all server-side code for CodeShare: an Axum HTTP
//! server that stores posted messages and fans them out to subscribers.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`messages`** - Validation, message store, `/api/messages` handlers
//! - **`realtime`** - Broadcaster, Pusher client, SSE subscription
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - codeshare-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── messages/       - Message handlers and store
//! ├── realtime/       - Event broadcasting
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! A post is validated, stamped, appended to the store, and run through the
//! fan-out decision. The chosen event goes to local SSE subscribers and to
//! Pusher. Any failure after validation is logged and answered with a
//! generic 500; nothing is retried or rolled back.
//!
//! # Example
//!
//! ```rust,no_run
//! use codeshare::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::from_env()).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Message handling
pub mod messages;

/// Real-time delivery
pub mod realtime;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState, ServerConfig};
pub use messages::MessageStore;
pub use realtime::Broadcaster;
pub use error::BackendError;
