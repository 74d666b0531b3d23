//! Profile domain module.
//!
//! The gamified user profile: the fixture profile card, badge and history
//! collections, and the single-slot repository interface for the avatar
//! image.
//!
//! # Module Structure
//!
//! - `model`: Profile domain models (`UserProfile`, `Badge`, `HistoryEntry`)
//! - `fixtures`: Static badge/history/profile content
//! - `repository`: Repository trait for the avatar image slot

mod fixtures;
mod model;
mod repository;

// Re-export public API
pub use fixtures::{demo_profile, BADGES, HISTORY};
pub use model::{Badge, HistoryEntry, UserProfile};
pub use repository::ProfileImageRepository;
