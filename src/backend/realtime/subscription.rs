/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) handler for
 * `GET /api/realtime`. It streams the same events that go to Pusher, for
 * clients that prefer talking to the API directly (the CLI does).
 *
 * # Event Filtering
 *
 * Clients can filter events by name using the `events` query parameter:
 * - `?events=new-message` - full messages only
 * - `?events=large-message-posted` - notifications only
 * - No parameter - both
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged receivers skip the missed events and keep streaming
 * - The stream ends when the broadcast channel closes
 */

use crate::backend::realtime::broadcast::Broadcaster;
use crate::shared::event::{LARGE_MESSAGE_POSTED, NEW_MESSAGE};
use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{Stream, StreamExt};
use std::collections::HashMap;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;

/// Parse the `events` query parameter
///
/// Unknown names are ignored. `None` means no filtering.
pub fn parse_event_filter(raw: Option<&String>) -> Option<Vec<&'static str>> {
    raw.map(|names| {
        names
            .split(',')
            .map(str::trim)
            .filter_map(|name| match name {
                NEW_MESSAGE => Some(NEW_MESSAGE),
                LARGE_MESSAGE_POSTED => Some(LARGE_MESSAGE_POSTED),
                _ => None,
            })
            .collect::<Vec<_>>()
    })
    .filter(|names| !names.is_empty())
}

/// Handle real-time subscription (GET /api/realtime)
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// id: 1714564800000
/// event: new-message
/// data: {"id":1714564800000,"user":"you","text":"hello","file":null,"ts":"..."}
/// ```
pub async fn handle_realtime_subscription(
    State(broadcaster): State<Broadcaster>,
    Query(query): Query<HashMap<String, String>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let filter = parse_event_filter(query.get("events"));

    match &filter {
        Some(names) => tracing::info!("[Realtime] New subscriber for {:?}", names),
        None => tracing::info!("[Realtime] New subscriber for all events"),
    }

    let stream = BroadcastStream::new(broadcaster.subscribe()).filter_map(move |item| {
        let filter = filter.clone();
        async move {
            let event = match item {
                Ok(event) => event,
                Err(err) => {
                    tracing::warn!("[Realtime] Subscriber fell behind: {}", err);
                    return None;
                }
            };

            if let Some(names) = &filter {
                if !names.contains(&event.name()) {
                    return None;
                }
            }

            let data = match event.data_json() {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                    return None;
                }
            };

            Some(Ok(Event::default()
                .id(event.message_id().to_string())
                .event(event.name())
                .data(data)))
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
