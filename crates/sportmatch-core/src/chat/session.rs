//! Chat session lifecycle and message ownership.

use chrono::Utc;
use uuid::Uuid;

use super::message::ChatMessage;
use crate::event::SportEvent;

/// Canned group activity shown when joining an event chat: sender, text, and
/// how long ago the message was posted (milliseconds).
const OPENING_MESSAGES: [(&str, &str, i64); 2] = [
    (
        "Carlos",
        "¡Hola a todos! ¿Alguien lleva material extra para hoy?",
        3_600_000,
    ),
    (
        "Marta",
        "¡Buenas! Yo llevo un par de toallas y agua de sobra. ¡Nos vemos en el parking!",
        1_800_000,
    ),
];

/// An active group chat for a joined event.
///
/// The session owns its ordered message sequence for its lifetime. Dropping
/// the session discards the history; messages are never persisted.
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// The joined event this chat belongs to
    pub event: SportEvent,
    /// Timestamp when the session was opened (epoch milliseconds)
    pub created_at: i64,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Opens a chat for a joined event, seeded with the canned group
    /// messages so the room never looks dead.
    pub fn for_event(event: SportEvent) -> Self {
        let now = Utc::now().timestamp_millis();
        let messages = OPENING_MESSAGES
            .iter()
            .map(|(sender, text, age_ms)| ChatMessage::incoming(*sender, *text, now - age_ms))
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            event,
            created_at: now,
            messages,
        }
    }

    /// Appends a message from the local user.
    ///
    /// Blank input is ignored and yields `None`; otherwise the appended
    /// message is returned.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::outgoing(text));
        self.messages.last()
    }

    /// The message history, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
