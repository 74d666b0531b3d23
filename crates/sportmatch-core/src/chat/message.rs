//! Chat message types.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single message in an event group chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Display name of the sender
    pub sender: String,
    /// Free-text body
    pub text: String,
    /// Timestamp when the message was created (epoch milliseconds)
    pub timestamp: i64,
    /// True when the local user sent the message
    pub is_me: bool,
}

impl ChatMessage {
    /// Creates a message sent by the local user, stamped now.
    pub fn outgoing(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: "Tú".to_string(),
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
            is_me: true,
        }
    }

    /// Creates a message from another participant with an explicit timestamp.
    pub fn incoming(sender: impl Into<String>, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: sender.into(),
            text: text.into(),
            timestamp,
            is_me: false,
        }
    }
}
