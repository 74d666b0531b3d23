//! Application layer for SportMatch.
//!
//! This crate provides use case implementations that coordinate between the
//! domain core and injected repository ports to implement application-level
//! behavior: browsing with discovery sampling, event creation, the ephemeral
//! event chat, and the profile screen.

pub mod browse_usecase;
pub mod chat_usecase;
pub mod event_usecase;
pub mod profile_usecase;

pub use browse_usecase::BrowseUseCase;
pub use chat_usecase::ChatUseCase;
pub use event_usecase::{EventUseCase, NewEventRequest};
pub use profile_usecase::ProfileUseCase;
