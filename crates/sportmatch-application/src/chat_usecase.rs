//! Chat use case implementation.
//!
//! The event chat is a mock scoped to one session: joining opens a session
//! seeded with canned group messages, sending appends to the session-owned
//! history, and leaving consumes the session so the history is discarded.
//! Nothing is persisted.

use tracing::debug;

use sportmatch_core::chat::{ChatMessage, ChatSession};
use sportmatch_core::event::SportEvent;

/// Use case for the event chat screen.
#[derive(Default)]
pub struct ChatUseCase;

impl ChatUseCase {
    /// Creates a new `ChatUseCase` instance.
    pub fn new() -> Self {
        Self
    }

    /// Opens a chat session for a joined event.
    pub fn join(&self, event: SportEvent) -> ChatSession {
        debug!(event_id = %event.id, "chat session opened");
        ChatSession::for_event(event)
    }

    /// Sends a message into the session. Blank input is ignored.
    pub fn send<'a>(&self, session: &'a mut ChatSession, text: &str) -> Option<&'a ChatMessage> {
        session.send(text)
    }

    /// Leaves the chat, consuming the session and discarding its history.
    pub fn leave(&self, session: ChatSession) {
        debug!(
            event_id = %session.event.id,
            discarded = session.messages().len(),
            "chat session closed"
        );
    }
}
