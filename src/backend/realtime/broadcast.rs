/**
 * Real-time Event Broadcasting
 *
 * This module delivers a `BroadcastEvent` to everyone watching the
 * workspace:
 *
 * - in-process subscribers of `GET /api/realtime`, through a
 *   `tokio::sync::broadcast` channel
 * - browsers connected to Pusher, through the trigger API (when configured)
 *
 * Having no local subscriber is normal and not an error. A Pusher failure is.
 */

use crate::backend::error::BackendError;
use crate::backend::realtime::pusher::PusherClient;
use crate::shared::{BroadcastEvent, CHANNEL};
use tokio::sync::broadcast;

/// Capacity of the in-process channel
pub const BROADCAST_CAPACITY: usize = 1000;

/// Sender half of the in-process event channel
pub type RealtimeEventBroadcast = broadcast::Sender<BroadcastEvent>;

/// Fan-out target for accepted posts
///
/// Cloning is cheap; clones publish to the same channel and Pusher app.
#[derive(Clone, Debug)]
pub struct Broadcaster {
    local: RealtimeEventBroadcast,
    pusher: Option<PusherClient>,
}

impl Broadcaster {
    /// Create a broadcaster, optionally forwarding to Pusher
    pub fn new(pusher: Option<PusherClient>) -> Self {
        let (local, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { local, pusher }
    }

    /// Broadcaster without a Pusher app
    pub fn local_only() -> Self {
        Self::new(None)
    }

    pub fn has_pusher(&self) -> bool {
        self.pusher.is_some()
    }

    pub fn sender(&self) -> RealtimeEventBroadcast {
        self.local.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastEvent> {
        self.local.subscribe()
    }

    /// Publish an event to local subscribers, then to Pusher
    ///
    /// # Returns
    ///
    /// Number of local subscribers that received the event
    ///
    /// # Errors
    ///
    /// Fails when the Pusher trigger fails. Local delivery has already
    /// happened at that point and is not undone.
    pub async fn publish(&self, event: BroadcastEvent) -> Result<usize, BackendError> {
        let delivered = broadcast_event(&self.local, event.clone());

        if let Some(pusher) = &self.pusher {
            pusher.trigger(CHANNEL, &event).await?;
        }

        Ok(delivered)
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::local_only()
    }
}

/// Send an event on the in-process channel
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if no subscribers)
pub fn broadcast_event(broadcast_tx: &RealtimeEventBroadcast, event: BroadcastEvent) -> usize {
    let name = event.name();
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!("[Realtime] {} delivered to {} local subscribers", name, subscriber_count);
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No local subscribers for {}", name);
            0
        }
    }
}
