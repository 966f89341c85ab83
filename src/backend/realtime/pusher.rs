/**
 * Pusher Channels Client
 *
 * Publishes events through the Pusher HTTP API:
 *
 * ```http
 * POST /apps/{app_id}/events?auth_key=..&auth_timestamp=..&auth_version=1.0&body_md5=..&auth_signature=..
 * Content-Type: application/json
 *
 * {"name":"new-message","channels":["workspace-channel"],"data":"{...}"}
 * ```
 *
 * The signature is the hex HMAC-SHA256, keyed with the app secret, of
 * `"POST\n<path>\n<query without auth_signature>"`. Query parameters are
 * listed in alphabetical order.
 *
 * Reference: https://pusher.com/docs/channels/library_auth_reference/rest-api/
 */

use crate::backend::error::BackendError;
use crate::shared::BroadcastEvent;
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use sha2::Sha256;

const AUTH_VERSION: &str = "1.0";

/// Credentials of a Pusher Channels app
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PusherConfig {
    pub app_id: String,
    pub key: String,
    pub secret: String,
    pub cluster: String,
    /// Overrides `https://api-{cluster}.pusher.com`
    pub host: Option<String>,
}

impl PusherConfig {
    /// Base URL requests are sent to
    pub fn base_url(&self) -> String {
        match &self.host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://api-{}.pusher.com", self.cluster),
        }
    }

    /// Path of the trigger endpoint
    pub fn events_path(&self) -> String {
        format!("/apps/{}/events", self.app_id)
    }
}

#[derive(Serialize)]
struct TriggerBody<'a> {
    name: &'a str,
    channels: [&'a str; 1],
    data: String,
}

/// HTTP client for the Pusher trigger API
#[derive(Clone, Debug)]
pub struct PusherClient {
    config: PusherConfig,
    http: reqwest::Client,
}

impl PusherClient {
    pub fn new(config: PusherConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &PusherConfig {
        &self.config
    }

    /// Trigger `event` on `channel`
    ///
    /// # Errors
    ///
    /// * `BroadcastError` - network failure or a non-2xx answer from Pusher
    /// * `SerializationError` - the event could not be encoded
    pub async fn trigger(&self, channel: &str, event: &BroadcastEvent) -> Result<(), BackendError> {
        let body = serde_json::to_string(&TriggerBody {
            name: event.name(),
            channels: [channel],
            data: event.data_json()?,
        })?;

        let path = self.config.events_path();
        let query = signed_query(
            &self.config.key,
            &self.config.secret,
            "POST",
            &path,
            &body,
            chrono::Utc::now().timestamp(),
        )?;
        let url = format!("{}{}?{}", self.config.base_url(), path, query);

        tracing::debug!("[Pusher] Triggering {} on {} ({} bytes)", event.name(), channel, body.len());

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(BackendError::broadcast(format!(
                "Pusher returned {}: {}",
                status,
                error_text.trim()
            )));
        }

        tracing::info!("[Pusher] Delivered {} for message {}", event.name(), event.message_id());
        Ok(())
    }
}

/// Hex HMAC-SHA256 of `payload` keyed with `secret`
pub fn sign(secret: &str, payload: &str) -> Result<String, BackendError> {
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(secret.as_bytes())
        .map_err(|e| BackendError::broadcast(format!("Invalid Pusher secret: {}", e)))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Build the authenticated query string for a request
pub fn signed_query(
    key: &str,
    secret: &str,
    method: &str,
    path: &str,
    body: &str,
    timestamp: i64,
) -> Result<String, BackendError> {
    let body_md5 = hex::encode(Md5::digest(body.as_bytes()));
    let params = format!(
        "auth_key={}&auth_timestamp={}&auth_version={}&body_md5={}",
        key, timestamp, AUTH_VERSION, body_md5
    );
    let signature = sign(secret, &format!("{}\n{}\n{}", method, path, params))?;
    Ok(format!("{}&auth_signature={}", params, signature))
}
