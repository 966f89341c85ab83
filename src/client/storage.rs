/**
 * Direct Object-Store Upload
 *
 * Attachments go straight from the client to the object store; the API
 * only ever sees the resulting [`FileAttachment`] metadata.
 *
 * - Object keys are `<uuid>-<sanitized file name>`
 * - Uploads hit `POST {base}/storage/v1/object/{bucket}/{key}`
 * - Public URLs are `{base}/storage/v1/object/public/{bucket}/{key}`
 * - The size limit is checked before any byte is sent
 * - The body is streamed in chunks, reporting progress after each one
 */

use std::path::Path;

use bytes::Bytes;
use futures_util::stream::{self, StreamExt};
use reqwest::{header, Body, Client};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::client::api::check;
use crate::client::error::ClientError;
use crate::shared::{AppConfig, FileAttachment};

/// Largest file accepted for upload (50 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Chunk size of the streamed upload body
pub const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Bytes sent so far out of the total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub sent: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Whole percent complete, 100 for empty files
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.sent.min(self.total) * 100) / self.total) as u8
    }
}

pub type ProgressSender = mpsc::UnboundedSender<UploadProgress>;

/// Client for the object store holding attachments
#[derive(Debug, Clone)]
pub struct ObjectStore {
    base_url: String,
    api_key: Option<String>,
    bucket: String,
    max_bytes: u64,
    http: Client,
}

impl ObjectStore {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, bucket: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            bucket: bucket.into(),
            max_bytes: MAX_UPLOAD_BYTES,
            http: Client::new(),
        }
    }

    /// Build from the client configuration; needs `storage_url`
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        let base_url = config
            .storage_url
            .as_deref()
            .ok_or(ClientError::StorageNotConfigured("storage_url"))?;
        Ok(Self::new(base_url, config.storage_key.clone(), config.bucket.clone()))
    }

    /// Override the upload size limit
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn upload_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, self.bucket, key)
    }

    /// Reject sizes over the limit
    pub fn check_size(&self, size: u64) -> Result<(), ClientError> {
        if size > self.max_bytes {
            return Err(ClientError::UploadTooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    /// Upload a file from disk
    ///
    /// The size is taken from file metadata, so an oversized file is rejected
    /// without being read.
    pub async fn upload_file(
        &self,
        path: &Path,
        progress: Option<ProgressSender>,
    ) -> Result<FileAttachment, ClientError> {
        let size = tokio::fs::metadata(path).await?.len();
        self.check_size(size)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let data = Bytes::from(tokio::fs::read(path).await?);
        self.upload_bytes(&name, data, None, progress).await
    }

    /// Upload in-memory bytes under a freshly generated key
    pub async fn upload_bytes(
        &self,
        name: &str,
        data: Bytes,
        content_type: Option<&str>,
        progress: Option<ProgressSender>,
    ) -> Result<FileAttachment, ClientError> {
        let total = data.len() as u64;
        self.check_size(total)?;

        let key = object_key(name);
        tracing::info!("[Store] Uploading {} ({} bytes) to {}", name, total, self.bucket);

        let mut request = self
            .http
            .post(self.upload_url(&key))
            .header(header::CONTENT_TYPE, content_type.unwrap_or(DEFAULT_CONTENT_TYPE))
            .header(header::CONTENT_LENGTH, total)
            .header("x-upsert", "false")
            .body(chunked_body(data, progress));
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key).header("apikey", api_key);
        }

        check(request.send().await?).await?;

        Ok(FileAttachment {
            url: self.public_url(&key),
            key,
            name: name.to_string(),
            size: total,
        })
    }
}

/// `<uuid>-<sanitized name>`
pub fn object_key(file_name: &str) -> String {
    format!("{}-{}", Uuid::new_v4(), sanitize_file_name(file_name))
}

/// Keep ASCII letters, digits, `.`, `-` and `_`; replace everything else
pub fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();

    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

fn chunked_body(data: Bytes, progress: Option<ProgressSender>) -> Body {
    let total = data.len() as u64;
    let chunks: Vec<Bytes> = (0..data.len())
        .step_by(UPLOAD_CHUNK_BYTES)
        .map(|start| data.slice(start..(start + UPLOAD_CHUNK_BYTES).min(data.len())))
        .collect();

    let mut sent = 0u64;
    let body = stream::iter(chunks).map(move |chunk| {
        sent += chunk.len() as u64;
        if let Some(tx) = &progress {
            // receiver may be gone; the upload continues regardless
            let _ = tx.send(UploadProgress { sent, total });
        }
        Ok::<_, std::io::Error>(chunk)
    });

    Body::wrap_stream(body)
}
