/**
 * Workspace View State
 *
 * Local copy of the message list, kept current by broadcast events:
 *
 * - `new-message` appends the message unless it is already shown
 * - `large-message-posted` carries no text, so the caller re-fetches the
 *   full list and hands it to [`ViewState::replace`]
 *
 * A subscriber lists after subscribing, so a post can arrive through both.
 * Messages are matched by `(id, ts, user)` rather than by position.
 */

use crate::shared::{BroadcastEvent, Message};

/// Drafts longer than this (in characters) are flagged as large
pub const LARGE_DRAFT_CHARS: usize = 5000;

const CODE_INDICATORS: [&str; 12] = [
    "{", "}", "()", "=>", "function", "const", "let", "var", "import", "export", "</", "/>",
];

/// Heuristic used to render a message as code
pub fn is_code(text: &str) -> bool {
    CODE_INDICATORS.iter().any(|indicator| text.contains(indicator))
}

/// Whether a draft should carry the large-message warning
pub fn is_large_draft(text: &str) -> bool {
    text.chars().count() > LARGE_DRAFT_CHARS
}

/// What applying an event did to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// The message was appended
    Appended(Message),
    /// The message was already in the view
    AlreadyShown { id: i64 },
    /// Only a notification arrived; re-fetch the list
    RefreshNeeded { id: i64 },
}

/// Ordered list of the messages on screen
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    messages: Vec<Message>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether the view already holds this message
    ///
    /// Ids are post-time milliseconds and can collide, so `ts` and `user`
    /// are compared as well.
    pub fn contains(&self, message: &Message) -> bool {
        self.messages.iter().any(|shown| same_message(shown, message))
    }

    /// Replace the list with a fresh copy from the server
    ///
    /// # Returns
    ///
    /// The messages of the new list that were not shown before, in list order.
    pub fn replace(&mut self, messages: Vec<Message>) -> Vec<Message> {
        let fresh = messages
            .iter()
            .filter(|message| !self.contains(message))
            .cloned()
            .collect();
        self.messages = messages;
        fresh
    }

    /// Apply a broadcast event
    pub fn apply(&mut self, event: BroadcastEvent) -> ViewUpdate {
        match event {
            BroadcastEvent::NewMessage(message) if self.contains(&message) => {
                ViewUpdate::AlreadyShown { id: message.id }
            }
            BroadcastEvent::NewMessage(message) => {
                self.messages.push(message.clone());
                ViewUpdate::Appended(message)
            }
            BroadcastEvent::LargeMessagePosted(stub) => ViewUpdate::RefreshNeeded { id: stub.id },
        }
    }
}

fn same_message(a: &Message, b: &Message) -> bool {
    a.id == b.id && a.ts == b.ts && a.user == b.user
}
