//! Client Library
//!
//! Everything a CodeShare client needs apart from rendering:
//!
//! - **`api`** - HTTP client for `/api/messages` and the realtime stream
//! - **`sse`** - Incremental `text/event-stream` parser
//! - **`storage`** - Direct upload of attachments to the object store
//! - **`gate`** - Client-side passphrase gate
//! - **`view`** - Local message list driven by broadcast events
//! - **`config`** - Config file and environment loading
//! - **`error`** - `ClientError`

pub mod api;
pub mod config;
pub mod error;
pub mod gate;
pub mod sse;
pub mod storage;
pub mod view;

pub use api::{ApiClient, EventStream};
pub use error::ClientError;
pub use gate::PassphraseGate;
pub use storage::{ObjectStore, UploadProgress, MAX_UPLOAD_BYTES};
pub use view::{ViewState, ViewUpdate};
