//! Chat domain module.
//!
//! The group chat attached to a joined event. Sessions are ephemeral: a
//! session owns its message sequence for its lifetime and the whole history
//! is discarded when the user exits the chat. Nothing here touches storage.
//!
//! # Module Structure
//!
//! - `message`: Chat message types (`ChatMessage`)
//! - `session`: Session lifecycle and message ownership (`ChatSession`)

mod message;
mod session;

// Re-export public API
pub use message::ChatMessage;
pub use session::ChatSession;
