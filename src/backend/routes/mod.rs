//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - /api endpoints
//! ```
//!
//! # Route Types
//!
//! - `GET /api/messages` - Full message list
//! - `POST /api/messages` - Post a message
//! - `GET /api/realtime` - SSE event stream
//!
//! Anything else answers 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
