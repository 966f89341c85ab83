//! Real-time Update Module
//!
//! This module delivers the event chosen by the fan-out decision to
//! subscribers.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Broadcaster (local channel + Pusher)
//! ├── pusher.rs       - Signed Pusher trigger client
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Delivery
//!
//! Every event goes to the in-process `tokio::sync::broadcast` channel
//! first, then to Pusher when credentials are configured. Browsers listen
//! on Pusher; the CLI and other API clients can use `GET /api/realtime`.

/// Event broadcasting utilities
pub mod broadcast;

/// Pusher Channels client
pub mod pusher;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, Broadcaster, RealtimeEventBroadcast};
pub use pusher::{PusherClient, PusherConfig};
pub use subscription::handle_realtime_subscription;
