/**
 * CodeShare HTTP Client
 *
 * Talks to the message API:
 *
 * - `GET /api/messages` lists every message in posting order
 * - `POST /api/messages` posts text and/or a file reference
 * - `GET /api/realtime` subscribes to broadcast events over SSE
 *
 * Non-2xx answers become [`ClientError::Rejected`] carrying the server's
 * `error` string.
 */

use std::collections::VecDeque;
use std::pin::Pin;

use futures_util::stream::{self, Stream, StreamExt};
use reqwest::{header, Client, Response};
use serde::Deserialize;

use crate::client::error::ClientError;
use crate::client::sse::{SseFrame, SseParser};
use crate::shared::{AppConfig, BroadcastEvent, FileAttachment, Message, PostMessageRequest};

pub const MESSAGES_PATH: &str = "/api/messages";
pub const REALTIME_PATH: &str = "/api/realtime";

/// Live broadcast events
pub type EventStream = Pin<Box<dyn Stream<Item = Result<BroadcastEvent, ClientError>> + Send>>;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the message API
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: AppConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fetch every message
    pub async fn list_messages(&self) -> Result<Vec<Message>, ClientError> {
        let response = self.http.get(self.config.api_url(MESSAGES_PATH)).send().await?;
        let messages = check(response).await?.json::<Vec<Message>>().await?;
        tracing::debug!("[Api] Loaded {} messages", messages.len());
        Ok(messages)
    }

    /// Post a message
    ///
    /// # Returns
    ///
    /// The stored message with its server-assigned `id` and `ts`.
    pub async fn post_message(&self, request: &PostMessageRequest) -> Result<Message, ClientError> {
        let response = self
            .http
            .post(self.config.api_url(MESSAGES_PATH))
            .json(request)
            .send()
            .await?;
        let message = check(response).await?.json::<Message>().await?;
        tracing::info!("[Api] Posted message {}", message.id);
        Ok(message)
    }

    /// Post as the configured user
    pub async fn post(&self, text: &str, file: Option<FileAttachment>) -> Result<Message, ClientError> {
        let mut request = PostMessageRequest::text(&self.config.user, text);
        if let Some(file) = file {
            request = request.with_file(file);
        }
        self.post_message(&request).await
    }

    /// Subscribe to broadcast events
    ///
    /// Frames whose event name is not a broadcast event are skipped.
    pub async fn subscribe(&self) -> Result<EventStream, ClientError> {
        let response = self
            .http
            .get(self.config.api_url(REALTIME_PATH))
            .header(header::ACCEPT, "text/event-stream")
            .send()
            .await?;
        let bytes = Box::pin(check(response).await?.bytes_stream());
        tracing::info!("[Api] Subscribed to realtime events");

        let state = (bytes, SseParser::new(), VecDeque::<SseFrame>::new());
        let events = stream::unfold(state, |(mut bytes, mut parser, mut pending)| async move {
            loop {
                if let Some(frame) = pending.pop_front() {
                    match BroadcastEvent::from_parts(&frame.event, &frame.data) {
                        Ok(event) => return Some((Ok(event), (bytes, parser, pending))),
                        Err(e) => {
                            tracing::debug!("[Api] Skipping '{}' frame: {}", frame.event, e);
                            continue;
                        }
                    }
                }

                match bytes.next().await {
                    Some(Ok(chunk)) => pending.extend(parser.feed(&chunk)),
                    Some(Err(e)) => return Some((Err(ClientError::from(e)), (bytes, parser, pending))),
                    None => return None,
                }
            }
        });

        Ok(Box::pin(events))
    }
}

/// Turn a non-2xx response into [`ClientError::Rejected`]
pub(crate) async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or_else(|_| if body.is_empty() { status.to_string() } else { body });

    tracing::warn!("[Api] Request failed with {}: {}", status, message);
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}
