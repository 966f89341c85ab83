//! Client Error Types

use thiserror::Error;

use crate::shared::{ConfigError, SharedError};

/// Errors returned by the client library
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure talking to the API or the object store
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API or the object store answered with a non-2xx status
    #[error("Request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// File exceeds the upload limit; nothing was transferred
    #[error("File is {size} bytes, larger than the {limit} byte upload limit")]
    UploadTooLarge { size: u64, limit: u64 },

    /// Uploads need an object store URL
    #[error("Object storage is not configured: missing {0}")]
    StorageNotConfigured(&'static str),

    /// The passphrase gate is still closed
    #[error("Wrong passphrase")]
    Locked,

    #[error(transparent)]
    Shared(#[from] SharedError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Whether the server rejected the request because of its content
    pub fn is_client_rejection(&self) -> bool {
        matches!(self, Self::Rejected { status, .. } if (400..500).contains(status))
    }

    /// Process exit code for the CLI: 2 for bad input, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        let bad_input = self.is_client_rejection()
            || matches!(self, Self::UploadTooLarge { .. } | Self::Locked | Self::Config(_));
        if bad_input {
            2
        } else {
            1
        }
    }
}
