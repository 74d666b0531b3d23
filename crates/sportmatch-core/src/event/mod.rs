//! Event domain module.
//!
//! This module contains the meetup event domain model, the repository
//! interface for event persistence, and the static catalogs and seed
//! fixtures the application ships with.
//!
//! # Module Structure
//!
//! - `model`: Core event domain model (`SportEvent`, `SkillLevel`)
//! - `catalog`: Static activity and venue catalogs
//! - `fixtures`: Seed events used to populate an empty store
//! - `repository`: Repository trait for event persistence

mod catalog;
mod fixtures;
mod model;
mod repository;

// Re-export public API
pub use catalog::{BROWSE_ACTIVITIES, CREATE_ACTIVITIES, PIL_VENUES};
pub use fixtures::seed_events;
pub use model::{SkillLevel, SportEvent};
pub use repository::EventRepository;
